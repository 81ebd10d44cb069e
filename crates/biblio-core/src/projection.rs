use crate::catalog::CatalogTree;
use crate::catalog::Course;
use crate::catalog::Department;
use crate::catalog::Semester;
use crate::catalog::Year;
use crate::state::SelectionState;

/// Departments for the current level, filtered by the search query.
///
/// Matching is a case-insensitive substring test on the department name;
/// an empty query returns the full list. Original order is preserved.
/// Filtering is presentational only: a cascade selection pointing at a
/// filtered-out department stays valid.
pub fn visible_departments<'a>(
    tree: &'a CatalogTree,
    state: &SelectionState,
) -> Vec<&'a Department> {
    let query = state.search.trim().to_lowercase();
    tree.departments_for(state.level)
        .iter()
        .filter(|department| {
            query.is_empty() || department.name.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn visible_years<'a>(tree: &'a CatalogTree, state: &SelectionState) -> &'a [Year] {
    match state.department.as_deref() {
        Some(department) => tree.years_for(state.level, department),
        None => &[],
    }
}

pub fn visible_semesters<'a>(tree: &'a CatalogTree, state: &SelectionState) -> &'a [Semester] {
    match (state.department.as_deref(), state.year.as_deref()) {
        (Some(department), Some(year)) => tree.semesters_for(state.level, department, year),
        _ => &[],
    }
}

pub fn visible_courses<'a>(tree: &'a CatalogTree, state: &SelectionState) -> &'a [Course] {
    match (
        state.department.as_deref(),
        state.year.as_deref(),
        state.semester.as_deref(),
    ) {
        (Some(department), Some(year), Some(semester)) => {
            tree.courses_for(state.level, department, year, semester)
        }
        _ => &[],
    }
}

/// True once department, year and semester are all chosen; gates whether
/// the course list section renders at all.
pub fn is_course_list_ready(state: &SelectionState) -> bool {
    state.department.is_some() && state.year.is_some() && state.semester.is_some()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::Level;

    fn department(name: &str) -> Department {
        Department {
            name: name.to_string(),
            description: String::new(),
            years: Vec::new(),
        }
    }

    fn tree() -> CatalogTree {
        CatalogTree {
            undergraduate: vec![
                department("Computer Science"),
                department("Commerce"),
                department("Physics"),
            ],
            postgraduate: Vec::new(),
        }
    }

    fn state_with_search(search: &str) -> SelectionState {
        SelectionState {
            search: search.to_string(),
            ..SelectionState::new()
        }
    }

    #[test]
    fn empty_query_returns_full_list_in_order() {
        let tree = tree();
        let names: Vec<&str> = visible_departments(&tree, &SelectionState::new())
            .iter()
            .map(|department| department.name.as_str())
            .collect();
        assert_eq!(names, vec!["Computer Science", "Commerce", "Physics"]);
    }

    #[test]
    fn query_filters_case_insensitively_preserving_order() {
        let tree = tree();
        let names: Vec<&str> = visible_departments(&tree, &state_with_search("comp"))
            .iter()
            .map(|department| department.name.as_str())
            .collect();
        assert_eq!(names, vec!["Computer Science", "Commerce"]);
    }

    #[test]
    fn years_are_empty_without_a_department_selection() {
        let tree = tree();
        assert!(visible_years(&tree, &SelectionState::new()).is_empty());
    }

    #[test]
    fn years_are_empty_for_a_department_missing_from_the_level() {
        let tree = tree();
        let state = SelectionState {
            level: Level::Postgraduate,
            department: Some("Computer Science".to_string()),
            ..SelectionState::new()
        };
        assert!(visible_years(&tree, &state).is_empty());
    }

    #[test]
    fn course_list_readiness_requires_the_full_cascade() {
        let mut state = SelectionState::new();
        assert!(!is_course_list_ready(&state));
        state.department = Some("Computer Science".to_string());
        assert!(!is_course_list_ready(&state));
        state.year = Some("2nd Year".to_string());
        assert!(!is_course_list_ready(&state));
        state.semester = Some("Semester 3".to_string());
        assert!(is_course_list_ready(&state));
    }
}
