#[cfg(test)]
#[path = "pdf_test.rs"]
mod tests;

use std::fs;
use std::io;
use std::path;

use anyhow::anyhow;
use anyhow::Result;
use async_trait::async_trait;
use chrono::SecondsFormat;
use printpdf::BuiltinFont;
use printpdf::IndirectFontRef;
use printpdf::Mm;
use printpdf::PdfDocument;
use printpdf::PdfDocumentReference;
use printpdf::PdfLayerReference;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CompletedAnalysis;
use crate::domain::models::ExportStatus;
use crate::domain::models::Exporter;
use crate::domain::models::ExporterName;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 15.0;
const LINE_HEIGHT: f64 = 5.0;
const BODY_SIZE: f64 = 10.0;
const HEADING_SIZE: f64 = 13.0;
const TITLE_SIZE: f64 = 18.0;
const LINE_MAX_WIDTH: usize = 95;

/// Word-wraps free text so no line overflows the printable page width.
fn wrap(text: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for full_line in text.split('\n') {
        if full_line.trim().is_empty() {
            lines.push(" ".to_string());
            continue;
        }

        let mut char_count = 0;
        let mut current_lines: Vec<&str> = vec![];

        for word in full_line.split(' ') {
            if word.chars().count() + char_count + 1 > line_max_width {
                lines.push(current_lines.join(" ").trim_end().to_string());
                current_lines = vec![word];
                char_count = word.chars().count() + 1;
            } else {
                current_lines.push(word);
                char_count += word.chars().count() + 1;
            }
        }
        if !current_lines.is_empty() {
            lines.push(current_lines.join(" ").trim_end().to_string());
        }
    }

    return lines;
}

/// Writes lines top-down and starts a fresh page when the current one runs
/// out of vertical space.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f64,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> PageWriter<'a> {
        return PageWriter {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN,
        };
    }

    fn write(&mut self, text: &str, size: f64, font: &IndirectFontRef) {
        if self.y < MARGIN {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }

        self.layer
            .use_text(
                text.to_string(),
                size as f32,
                Mm(MARGIN as f32),
                Mm(self.y as f32),
                font,
            );
        self.y -= LINE_HEIGHT;
    }

    fn blank(&mut self) {
        self.y -= LINE_HEIGHT;
    }
}

pub struct PdfExporter {
    dir: path::PathBuf,
}

impl Default for PdfExporter {
    fn default() -> PdfExporter {
        return PdfExporter {
            dir: path::PathBuf::from(Config::get(ConfigKey::ExportDir)),
        };
    }
}

impl PdfExporter {
    fn write_report(&self, analysis: &CompletedAnalysis) -> Result<path::PathBuf> {
        let result = &analysis.result;
        let (doc, page, layer) = PdfDocument::new(
            "Resume Match Report",
            Mm(PAGE_WIDTH as f32),
            Mm(PAGE_HEIGHT as f32),
            "Layer 1",
        );

        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|_| return anyhow!("could not load the built-in PDF font"))?;
        let heading_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|_| return anyhow!("could not load the built-in PDF font"))?;

        let mut writer = PageWriter::new(&doc, doc.get_page(page).get_layer(layer));

        writer.write("Resume Match Report", TITLE_SIZE, &heading_font);
        writer.blank();
        writer.write(
            &format!(
                "Generated: {}",
                analysis
                    .finished_at
                    .to_rfc3339_opts(SecondsFormat::Secs, false)
            ),
            BODY_SIZE,
            &body_font,
        );
        writer.blank();

        writer.write(
            &format!("Match Score: {}%", result.match_percentage),
            HEADING_SIZE,
            &heading_font,
        );
        writer.blank();

        let sections: Vec<(&str, Vec<String>)> = vec![
            ("Matched Skills", marked(&result.matched_skills, "+")),
            ("Missing Skills", marked(&result.missing_skills, "-")),
            (
                "Improvement Suggestions",
                result
                    .improvement_suggestions
                    .iter()
                    .enumerate()
                    .map(|(idx, suggestion)| {
                        return format!("{}. {suggestion}", idx + 1);
                    })
                    .collect::<Vec<String>>(),
            ),
        ];

        for (title, items) in sections {
            writer.write(title, HEADING_SIZE, &heading_font);
            if items.is_empty() {
                writer.write("(none)", BODY_SIZE, &body_font);
            }
            for item in items {
                for line in wrap(&item, LINE_MAX_WIDTH) {
                    writer.write(&line, BODY_SIZE, &body_font);
                }
            }
            writer.blank();
        }

        for (title, text) in [
            ("Resume", &analysis.resume_text),
            ("Job Description", &analysis.job_description_text),
        ] {
            writer.write(title, HEADING_SIZE, &heading_font);
            for line in wrap(text, LINE_MAX_WIDTH) {
                writer.write(&line, BODY_SIZE, &body_font);
            }
            writer.blank();
        }

        let file_path = self.dir.join(format!(
            "match-report-{}.pdf",
            analysis.finished_at.format("%Y%m%d-%H%M%S")
        ));

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let file = fs::File::create(&file_path)?;
        doc.save(&mut io::BufWriter::new(file))
            .map_err(|_| return anyhow!("could not encode the PDF document"))?;

        return Ok(file_path);
    }
}

fn marked(items: &[String], marker: &str) -> Vec<String> {
    return items
        .iter()
        .map(|item| {
            return format!("{marker} {item}");
        })
        .collect::<Vec<String>>();
}

#[async_trait]
impl Exporter for PdfExporter {
    fn name(&self) -> ExporterName {
        return ExporterName::Pdf;
    }

    #[allow(clippy::implicit_return)]
    async fn export(&self, analysis: &CompletedAnalysis) -> ExportStatus {
        match self.write_report(analysis) {
            Ok(file_path) => {
                return ExportStatus::succeeded(&format!(
                    "Saved match report to {}",
                    file_path.display()
                ));
            }
            Err(err) => {
                tracing::error!(error = ?err, "pdf export failed");
                return ExportStatus::failed(&format!("Could not write the match report: {err}"));
            }
        }
    }
}
