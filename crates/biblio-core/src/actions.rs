use crate::catalog::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// Switch the program level tab; the whole cascade below it is cleared.
    SetLevel(Level),
    /// Pick a department; year and semester are cleared.
    SetDepartment(String),
    /// Pick a year within the selected department; semester is cleared.
    /// Ignored when no department is selected.
    SetYear(String),
    /// Pick a semester within the selected year.
    /// Ignored when no year is selected.
    SetSemester(String),
    /// Replace the department search query; never touches the cascade.
    SetSearch(String),
    /// Clear department, year, semester and search. The level stays.
    Reset,
    /// Signal a syllabus download for a course row; not a state transition.
    RequestDownload { code: String, name: String },
}
