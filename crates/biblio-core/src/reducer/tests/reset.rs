use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reset_clears_selections_and_search_but_keeps_the_level() {
    let mut before = selected();
    before.level = Level::Postgraduate;
    before.search = "comp".to_string();

    let next = apply(before, BrowseAction::Reset);

    assert_eq!(next.level, Level::Postgraduate);
    assert_eq!(next.department, None);
    assert_eq!(next.year, None);
    assert_eq!(next.semester, None);
    assert_eq!(next.search, "");
}

#[test]
fn reset_on_a_fresh_state_is_a_fixed_point() {
    let next = apply(state(), BrowseAction::Reset);
    assert_eq!(next, state());
}
