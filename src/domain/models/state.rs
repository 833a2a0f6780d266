use super::CompletedAnalysis;
use super::ErrorInfo;

/// View state for one analyze-and-review interaction. Exactly one variant is
/// active at a time; the UI only ever receives cloned snapshots, the
/// controller owns the live value.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Success(CompletedAnalysis),
    Failure(ErrorInfo),
}

impl Default for SessionState {
    fn default() -> SessionState {
        return SessionState::Idle;
    }
}
