use super::*;
use pretty_assertions::assert_eq;

#[test]
fn year_pick_without_a_department_is_ignored() {
    let before = state();
    let next = apply(before.clone(), BrowseAction::SetYear("2nd Year".to_string()));
    assert_eq!(next, before);
}

#[test]
fn semester_pick_without_a_year_is_ignored() {
    let before = apply(
        state(),
        BrowseAction::SetDepartment("Computer Science".to_string()),
    );
    let next = apply(before.clone(), BrowseAction::SetSemester("Semester 3".to_string()));
    assert_eq!(next, before);
}

#[test]
fn stale_semester_pick_after_a_department_switch_is_ignored() {
    // The department switch cleared the year, so a semester event issued
    // against the old render must be dropped.
    let mut current = selected();
    current = apply(current, BrowseAction::SetDepartment("Commerce".to_string()));
    let next = apply(current.clone(), BrowseAction::SetSemester("Semester 3".to_string()));
    assert_eq!(next, current);
}
