use super::ExportStatus;
use super::HistoryEntry;
use super::SessionState;

/// Notifications from the actions worker back to the UI.
pub enum Event {
    SessionUpdate(SessionState),
    HistoryUpdate(Vec<HistoryEntry>),
    ExportComplete(ExportStatus),
    HealthCheckFailed(String),
}
