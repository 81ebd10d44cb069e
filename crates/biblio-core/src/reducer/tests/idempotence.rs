use super::*;
use pretty_assertions::assert_eq;

fn assert_idempotent(start: SelectionState, action: BrowseAction) {
    let (once, _) = reduce(start.clone(), action.clone());
    let (twice, _) = reduce(once.clone(), action);
    assert_eq!(once, twice);
}

#[test]
fn repeating_an_action_changes_nothing_further() {
    assert_idempotent(selected(), BrowseAction::SetLevel(Level::Postgraduate));
    assert_idempotent(selected(), BrowseAction::SetDepartment("Commerce".to_string()));
    assert_idempotent(selected(), BrowseAction::SetYear("1st Year".to_string()));
    assert_idempotent(selected(), BrowseAction::SetSemester("Semester 4".to_string()));
    assert_idempotent(selected(), BrowseAction::SetSearch("comp".to_string()));
    assert_idempotent(selected(), BrowseAction::Reset);
    assert_idempotent(state(), BrowseAction::SetYear("2nd Year".to_string()));
}
