use crate::actions::BrowseAction;
use crate::state::SelectionState;

/// Boundary side effects produced by a transition. The reducer itself
/// performs no I/O; the session routes these to collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEffect {
    DownloadRequested { code: String, name: String },
}

/// Pure transition function: applies an action and returns the next state
/// plus any boundary effects. Total and deterministic; the same
/// (state, action) pair always yields the same result.
pub fn reduce(state: SelectionState, action: BrowseAction) -> (SelectionState, Vec<BrowseEffect>) {
    match action {
        BrowseAction::SetLevel(level) => {
            // Department names are only unique within a level, so the whole
            // sub-tree selection is invalid once the level moves.
            let next = SelectionState {
                level,
                department: None,
                year: None,
                semester: None,
                search: state.search,
            };
            (next, Vec::new())
        }
        BrowseAction::SetDepartment(name) => {
            let next = SelectionState {
                department: Some(name),
                year: None,
                semester: None,
                ..state
            };
            (next, Vec::new())
        }
        BrowseAction::SetYear(year) => {
            if state.department.is_none() {
                // Stale event from a previous render; drop it.
                tracing::debug!(%year, "year picked with no department selected");
                return (state, Vec::new());
            }
            let next = SelectionState {
                year: Some(year),
                semester: None,
                ..state
            };
            (next, Vec::new())
        }
        BrowseAction::SetSemester(semester) => {
            if state.year.is_none() {
                tracing::debug!(%semester, "semester picked with no year selected");
                return (state, Vec::new());
            }
            let next = SelectionState {
                semester: Some(semester),
                ..state
            };
            (next, Vec::new())
        }
        BrowseAction::SetSearch(query) => {
            let next = SelectionState {
                search: query,
                ..state
            };
            (next, Vec::new())
        }
        BrowseAction::Reset => {
            let next = SelectionState {
                level: state.level,
                ..SelectionState::new()
            };
            (next, Vec::new())
        }
        BrowseAction::RequestDownload { code, name } => {
            // Notification only: repeated requests emit repeated events and
            // the selection is left untouched.
            (state, vec![BrowseEffect::DownloadRequested { code, name }])
        }
    }
}

#[cfg(test)]
mod tests;
