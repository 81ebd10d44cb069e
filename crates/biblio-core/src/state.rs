use serde::Deserialize;
use serde::Serialize;

use crate::catalog::Level;

/// The cascading selection owned by a browsing session.
///
/// Replaced wholesale by the reducer on every action; never mutated in
/// place. `department`, `year` and `semester` form the cascade: each is
/// meaningful only while its ancestor is set. `search` is independent of
/// the cascade and filters the department list presentationally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub level: Level,
    pub department: Option<String>,
    pub year: Option<String>,
    pub semester: Option<String>,
    pub search: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            level: Level::Undergraduate,
            department: None,
            year: None,
            semester: None,
            search: String::new(),
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
