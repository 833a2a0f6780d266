#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::History;
use crate::domain::models::AnalysisRequest;
use crate::domain::models::BackendBox;
use crate::domain::models::CompletedAnalysis;
use crate::domain::models::Event;
use crate::domain::models::HistoryEntry;
use crate::domain::models::SessionState;

/// Drives the idle → loading → success|failure lifecycle of one analysis
/// interaction. Owns the session state and the history; the UI only sees
/// snapshots sent over the event channel.
pub struct SessionController {
    backend: BackendBox,
    state: SessionState,
    history: History,
    tx: mpsc::UnboundedSender<Event>,
}

impl SessionController {
    pub fn new(backend: BackendBox, tx: mpsc::UnboundedSender<Event>) -> SessionController {
        return SessionController {
            backend,
            state: SessionState::Idle,
            history: History::default(),
            tx,
        };
    }

    pub fn current_state(&self) -> &SessionState {
        return &self.state;
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        return self.history.list();
    }

    /// Runs one analysis round trip. Invalid documents fail fast without a
    /// network call. The state moves to `Loading` before the request goes
    /// out, and exactly one transition out of `Loading` follows.
    pub async fn submit(&mut self, request: AnalysisRequest) -> Result<()> {
        if matches!(self.state, SessionState::Loading) {
            // A second submit while one is in flight is dropped rather than
            // racing the first to completion.
            tracing::warn!("analysis already in flight, ignoring submit");
            return Ok(());
        }

        if let Err(info) = request.validate() {
            tracing::debug!(message = %info.message, "rejected invalid documents");
            self.transition(SessionState::Failure(info))?;
            return Ok(());
        }

        self.transition(SessionState::Loading)?;

        match self.backend.analyze(&request).await {
            Ok(result) => {
                self.history.push(HistoryEntry::new(result.clone()));
                self.tx.send(Event::HistoryUpdate(self.history.list()))?;
                self.transition(SessionState::Success(CompletedAnalysis::new(
                    result, &request,
                )))?;
            }
            Err(info) => {
                tracing::error!(kind = %info.kind, message = %info.message, "analysis failed");
                self.transition(SessionState::Failure(info))?;
            }
        }

        return Ok(());
    }

    pub fn dismiss_error(&mut self) -> Result<()> {
        if matches!(self.state, SessionState::Failure(_)) {
            self.transition(SessionState::Idle)?;
        }

        return Ok(());
    }

    fn transition(&mut self, state: SessionState) -> Result<()> {
        self.state = state;
        self.tx.send(Event::SessionUpdate(self.state.clone()))?;
        return Ok(());
    }
}
