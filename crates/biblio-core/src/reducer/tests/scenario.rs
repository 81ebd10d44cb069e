use super::*;
use pretty_assertions::assert_eq;

use crate::library::LibraryData;
use crate::projection::is_course_list_ready;
use crate::projection::visible_courses;
use crate::projection::visible_departments;

fn data() -> LibraryData {
    LibraryData::builtin().expect("builtin dataset is valid")
}

#[test]
fn narrowing_down_to_a_course_list() {
    let data = data();
    let mut current = state();

    current = apply(current, BrowseAction::SetDepartment("Computer Science".to_string()));
    assert_eq!(current.department.as_deref(), Some("Computer Science"));
    assert_eq!(current.year, None);
    assert_eq!(current.semester, None);

    current = apply(current, BrowseAction::SetYear("2nd Year".to_string()));
    assert_eq!(current.year.as_deref(), Some("2nd Year"));
    assert_eq!(current.semester, None);

    current = apply(current, BrowseAction::SetSemester("Semester 3".to_string()));
    assert_eq!(current.semester.as_deref(), Some("Semester 3"));
    assert!(is_course_list_ready(&current));

    let codes: Vec<&str> = visible_courses(&data.syllabi, &current)
        .iter()
        .map(|course| course.code.as_str())
        .collect();
    assert_eq!(codes, vec!["CS301", "CS302", "CS303"]);

    let first = &visible_courses(&data.syllabi, &current)[0];
    assert_eq!(first.name, "Data Structures");
    assert_eq!(first.credits, 4);
    assert_eq!(first.kind, "Core");
}

#[test]
fn level_switch_empties_the_course_list() {
    let data = data();
    let mut current = selected();
    assert!(!visible_courses(&data.syllabi, &current).is_empty());

    current = apply(current, BrowseAction::SetLevel(Level::Postgraduate));
    assert!(!is_course_list_ready(&current));
    assert!(visible_courses(&data.syllabi, &current).is_empty());
}

#[test]
fn searching_comp_keeps_computer_science_and_commerce() {
    let data = data();
    let current = apply(state(), BrowseAction::SetSearch("comp".to_string()));

    let names: Vec<&str> = visible_departments(&data.syllabi, &current)
        .iter()
        .map(|department| department.name.as_str())
        .collect();
    assert_eq!(names, vec!["Computer Science", "Commerce"]);
}
