use anyhow::Result;

use super::wrap;
use super::PdfExporter;
use crate::domain::models::AnalysisRequest;
use crate::domain::models::AnalysisResult;
use crate::domain::models::CompletedAnalysis;
use crate::domain::models::Exporter;

impl PdfExporter {
    fn with_dir(dir: std::path::PathBuf) -> PdfExporter {
        return PdfExporter { dir };
    }
}

fn analysis_fixture() -> CompletedAnalysis {
    let result = AnalysisResult {
        match_percentage: 72,
        matched_skills: vec!["SQL".to_string()],
        missing_skills: vec!["Kubernetes".to_string()],
        improvement_suggestions: vec!["Add cloud experience".to_string()],
    };

    return CompletedAnalysis::new(
        result,
        &AnalysisRequest::new(
            &"Senior engineer with SQL experience. ".repeat(40),
            &"Looking for a platform engineer. ".repeat(40),
        ),
    );
}

#[tokio::test]
async fn it_writes_a_pdf_artifact() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let exporter = PdfExporter::with_dir(dir.path().to_path_buf());

    let status = exporter.export(&analysis_fixture()).await;
    assert!(status.success, "{}", status.message);
    assert!(status.message.contains(".pdf"));

    let file_path = dir.path().read_dir()?.next().unwrap()?.path();
    assert_eq!(file_path.extension().unwrap(), "pdf");

    let bytes = std::fs::read(file_path)?;
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);

    return Ok(());
}

#[tokio::test]
async fn it_reports_failures_instead_of_raising_them() -> Result<()> {
    let blocker = tempfile::NamedTempFile::new()?;
    let exporter = PdfExporter::with_dir(blocker.path().to_path_buf());

    let status = exporter.export(&analysis_fixture()).await;

    assert!(!status.success);
    assert!(status.message.contains("Could not write the match report"));

    return Ok(());
}

#[test]
fn it_wraps_long_lines_to_the_page_width() {
    let text = "word ".repeat(100);

    let lines = wrap(text.trim(), 20);

    assert!(lines.len() > 1);
    assert!(lines.iter().all(|line| return line.chars().count() <= 20));
}

#[test]
fn it_keeps_blank_lines_when_wrapping() {
    let lines = wrap("first\n\nsecond", 20);

    assert_eq!(lines, vec!["first", " ", "second"]);
}
