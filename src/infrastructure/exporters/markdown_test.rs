use anyhow::Result;

use super::MarkdownExporter;
use crate::domain::models::AnalysisRequest;
use crate::domain::models::AnalysisResult;
use crate::domain::models::CompletedAnalysis;
use crate::domain::models::Exporter;

impl MarkdownExporter {
    fn with_dir(dir: std::path::PathBuf) -> MarkdownExporter {
        return MarkdownExporter { dir };
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
            "Senior engineer with SQL experience",
            "Looking for a platform engineer",
        ),
    );
}

#[tokio::test]
async fn it_writes_a_reconstructable_report() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let exporter = MarkdownExporter::with_dir(dir.path().to_path_buf());
    let analysis = analysis_fixture();

    let status = exporter.export(&analysis).await;
    assert!(status.success, "{}", status.message);

    let file_path = dir
        .path()
        .read_dir()?
        .next()
        .unwrap()?
        .path();
    assert_eq!(file_path.extension().unwrap(), "md");

    let content = std::fs::read_to_string(file_path)?;
    assert!(content.contains("72"));
    assert!(content.contains("SQL"));
    assert!(content.contains("Kubernetes"));
    assert!(content.contains("Add cloud experience"));
    assert!(content.contains("Generated:"));
    assert!(content.contains("Senior engineer with SQL experience"));
    assert!(content.contains("Looking for a platform engineer"));

    return Ok(());
}

#[tokio::test]
async fn it_marks_empty_skill_lists() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let exporter = MarkdownExporter::with_dir(dir.path().to_path_buf());
    let mut analysis = analysis_fixture();
    analysis.result.missing_skills = vec![];

    let status = exporter.export(&analysis).await;
    assert!(status.success);

    let file_path = dir.path().read_dir()?.next().unwrap()?.path();
    let content = std::fs::read_to_string(file_path)?;
    assert!(content.contains("(none)"));

    return Ok(());
}

#[tokio::test]
async fn it_reports_failures_instead_of_raising_them() -> Result<()> {
    let blocker = tempfile::NamedTempFile::new()?;
    let exporter = MarkdownExporter::with_dir(blocker.path().to_path_buf());

    let status = exporter.export(&analysis_fixture()).await;

    assert!(!status.success);
    assert!(status.message.contains("Could not write the match report"));

    return Ok(());
}
