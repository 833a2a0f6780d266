pub mod markdown;
pub mod pdf;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::ExporterBox;
use crate::domain::models::ExporterName;

pub struct ExporterManager {}

impl ExporterManager {
    pub fn get(name: ExporterName) -> Result<ExporterBox> {
        if name == ExporterName::Pdf {
            return Ok(Box::<pdf::PdfExporter>::default());
        }

        if name == ExporterName::Markdown {
            return Ok(Box::<markdown::MarkdownExporter>::default());
        }

        bail!(format!("No exporter implemented for {name}"))
    }
}
