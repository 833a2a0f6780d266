#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use async_trait::async_trait;
use chrono::SecondsFormat;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CompletedAnalysis;
use crate::domain::models::ExportStatus;
use crate::domain::models::Exporter;
use crate::domain::models::ExporterName;

fn render(analysis: &CompletedAnalysis) -> String {
    let result = &analysis.result;
    let mut doc: Vec<String> = vec![
        "# Resume Match Report".to_string(),
        format!(
            "Generated: {}",
            analysis
                .finished_at
                .to_rfc3339_opts(SecondsFormat::Secs, false)
        ),
        "## Match Score".to_string(),
        format!("{}%", result.match_percentage),
    ];

    doc.push("## Matched Skills".to_string());
    doc.push(bullet_list(&result.matched_skills));

    doc.push("## Missing Skills".to_string());
    doc.push(bullet_list(&result.missing_skills));

    doc.push("## Improvement Suggestions".to_string());
    if result.improvement_suggestions.is_empty() {
        doc.push("(none)".to_string());
    } else {
        doc.push(
            result
                .improvement_suggestions
                .iter()
                .enumerate()
                .map(|(idx, suggestion)| {
                    return format!("{}. {suggestion}", idx + 1);
                })
                .collect::<Vec<String>>()
                .join("\n"),
        );
    }

    doc.push("## Resume".to_string());
    doc.push(analysis.resume_text.to_string());

    doc.push("## Job Description".to_string());
    doc.push(analysis.job_description_text.to_string());

    return doc.join("\n\n") + "\n";
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "(none)".to_string();
    }

    return items
        .iter()
        .map(|item| {
            return format!("- {item}");
        })
        .collect::<Vec<String>>()
        .join("\n");
}

pub struct MarkdownExporter {
    dir: path::PathBuf,
}

impl Default for MarkdownExporter {
    fn default() -> MarkdownExporter {
        return MarkdownExporter {
            dir: path::PathBuf::from(Config::get(ConfigKey::ExportDir)),
        };
    }
}

impl MarkdownExporter {
    async fn write_report(&self, analysis: &CompletedAnalysis) -> Result<path::PathBuf> {
        let file_path = self.dir.join(format!(
            "match-report-{}.md",
            analysis.finished_at.format("%Y%m%d-%H%M%S")
        ));

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).await?;
        }

        let mut file = fs::File::create(&file_path).await?;
        file.write_all(render(analysis).as_bytes()).await?;
        file.flush().await?;

        return Ok(file_path);
    }
}

#[async_trait]
impl Exporter for MarkdownExporter {
    fn name(&self) -> ExporterName {
        return ExporterName::Markdown;
    }

    #[allow(clippy::implicit_return)]
    async fn export(&self, analysis: &CompletedAnalysis) -> ExportStatus {
        match self.write_report(analysis).await {
            Ok(file_path) => {
                return ExportStatus::succeeded(&format!(
                    "Saved match report to {}",
                    file_path.display()
                ));
            }
            Err(err) => {
                tracing::error!(error = ?err, "markdown export failed");
                return ExportStatus::failed(&format!("Could not write the match report: {err}"));
            }
        }
    }
}
