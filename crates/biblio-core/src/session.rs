use crate::actions::BrowseAction;
use crate::reducer::reduce;
use crate::reducer::BrowseEffect;
use crate::state::SelectionState;

/// Notification contract for download intents. The core invokes it and
/// owns nothing about delivery (toast, log file, anything else).
pub trait DownloadSink {
    fn download_requested(&mut self, code: &str, name: &str);
}

/// A sink that drops everything; useful as a default and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DownloadSink for NullSink {
    fn download_requested(&mut self, _code: &str, _name: &str) {}
}

/// Owns the selection for one browsing view: applies actions in issue
/// order, routes boundary effects, and hands out state snapshots.
/// Discarded when the view goes away; nothing is persisted.
pub struct BrowseSession<S> {
    state: SelectionState,
    sink: S,
}

impl<S: DownloadSink> BrowseSession<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: SelectionState::new(),
            sink,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Apply one action synchronously and return the new state.
    pub fn dispatch(&mut self, action: BrowseAction) -> SelectionState {
        let (next, effects) = reduce(self.state.clone(), action);
        self.state = next;
        for effect in effects {
            match effect {
                BrowseEffect::DownloadRequested { code, name } => {
                    self.sink.download_requested(&code, &name);
                }
            }
        }
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::Level;

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<(String, String)>,
    }

    impl DownloadSink for RecordingSink {
        fn download_requested(&mut self, code: &str, name: &str) {
            self.events.push((code.to_string(), name.to_string()));
        }
    }

    #[test]
    fn dispatch_returns_the_new_state_synchronously() {
        let mut session = BrowseSession::new(NullSink);
        let state = session.dispatch(BrowseAction::SetDepartment("Physics".to_string()));
        assert_eq!(state.department.as_deref(), Some("Physics"));
        assert_eq!(session.state(), &state);
    }

    #[test]
    fn download_requests_reach_the_sink_without_touching_state() {
        let mut session = BrowseSession::new(RecordingSink::default());
        session.dispatch(BrowseAction::SetLevel(Level::Postgraduate));
        let before = session.state().clone();

        for _ in 0..2 {
            session.dispatch(BrowseAction::RequestDownload {
                code: "MCA101".to_string(),
                name: "Advanced Data Structures".to_string(),
            });
        }

        assert_eq!(session.state(), &before);
        assert_eq!(session.sink.events.len(), 2);
        assert_eq!(session.sink.events[0].0, "MCA101");
    }
}
