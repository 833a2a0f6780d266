use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::CompletedAnalysis;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExporterName {
    Pdf,
    Markdown,
}

impl ExporterName {
    pub fn parse(text: String) -> Option<ExporterName> {
        return ExporterName::iter().find(|e| return e.to_string() == text);
    }
}

/// Outcome of an export attempt. Exporters never fail with an unhandled
/// fault; anything that goes wrong internally lands here with `success`
/// false and a message the UI can show as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStatus {
    pub success: bool,
    pub message: String,
}

impl ExportStatus {
    pub fn succeeded(message: &str) -> ExportStatus {
        return ExportStatus {
            success: true,
            message: message.to_string(),
        };
    }

    pub fn failed(message: &str) -> ExportStatus {
        return ExportStatus {
            success: false,
            message: message.to_string(),
        };
    }
}

#[async_trait]
pub trait Exporter {
    /// Returns the name of the exporter.
    fn name(&self) -> ExporterName;

    /// Writes a completed analysis and its source documents to a standalone
    /// artifact containing the match percentage, both skill lists, the
    /// suggestions, and a timestamp — enough to reconstruct the analysis
    /// from the file alone. Export failures never touch the session state.
    async fn export(&self, analysis: &CompletedAnalysis) -> ExportStatus;
}

pub type ExporterBox = Box<dyn Exporter + Send + Sync>;
