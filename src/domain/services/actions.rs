use anyhow::Result;
use tokio::sync::mpsc;

use super::SessionController;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::Event;
use crate::domain::models::ExportStatus;
use crate::domain::models::ExporterName;
use crate::domain::models::SessionState;
use crate::infrastructure::exporters::ExporterManager;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Tab - Switch focus between the resume and the job description.
- CTRL+S - Submit both documents for analysis.
- CTRL+E - Export the current result as a match report.
- CTRL+T - Toggle between the Analyze and History tabs.
- CTRL+L - Load the bundled sample documents.
- Up arrow / Down arrow - Scroll the history list.
- ESC - Dismiss the current error or notice.
- CTRL+C - Exit jobfit.
        "#;

    return text.trim().to_string();
}

async fn export_current(session: &SessionController) -> ExportStatus {
    let analysis = match session.current_state() {
        SessionState::Success(analysis) => analysis,
        _ => {
            return ExportStatus::failed("There is no completed analysis to export yet.");
        }
    };

    let exporter_config = Config::get(ConfigKey::Exporter);
    let name = match ExporterName::parse(exporter_config.to_string()) {
        Some(name) => name,
        None => {
            return ExportStatus::failed(&format!(
                "'{exporter_config}' is not a known export format."
            ));
        }
    };

    match ExporterManager::get(name) {
        Ok(exporter) => return exporter.export(analysis).await,
        Err(err) => {
            return ExportStatus::failed(&format!("Could not create the exporter: {err}"));
        }
    }
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        if let Err(err) = backend.health_check().await {
            tracing::warn!(error = ?err, "scoring service health check failed");
            tx.send(Event::HealthCheckFailed(format!(
                "Could not reach the scoring service at {}. Analysis requests will fail until it is back up.",
                Config::get(ConfigKey::ServiceURL)
            )))?;
        }

        let mut session = SessionController::new(backend, tx.clone());

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            match action.unwrap() {
                Action::Analyze(request) => {
                    session.submit(request).await?;
                }
                Action::DismissError() => {
                    session.dismiss_error()?;
                }
                Action::ExportResult() => {
                    let status = export_current(&session).await;
                    tx.send(Event::ExportComplete(status))?;
                }
            }
        }
    }
}
