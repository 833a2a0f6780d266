use super::AnalysisRequest;
use super::MINIMUM_DOCUMENT_CHARS;
use crate::domain::models::ErrorKind;

fn document_of_length(len: usize) -> String {
    return "x".repeat(len);
}

#[test]
fn it_accepts_documents_at_the_minimum_length() {
    let request = AnalysisRequest::new(
        &document_of_length(MINIMUM_DOCUMENT_CHARS),
        &document_of_length(MINIMUM_DOCUMENT_CHARS),
    );

    assert!(request.validate().is_ok());
}

#[test]
fn it_rejects_a_short_resume() {
    let request = AnalysisRequest::new(
        &document_of_length(MINIMUM_DOCUMENT_CHARS - 1),
        &document_of_length(MINIMUM_DOCUMENT_CHARS),
    );

    let err = request.validate().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("Resume"));
    assert!(!err.message.contains("Job description"));
}

#[test]
fn it_rejects_a_short_job_description() {
    let request = AnalysisRequest::new(
        &document_of_length(MINIMUM_DOCUMENT_CHARS),
        &document_of_length(MINIMUM_DOCUMENT_CHARS - 1),
    );

    let err = request.validate().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("Job description"));
}

#[test]
fn it_reports_both_documents_in_one_message() {
    let request = AnalysisRequest::new("short", "short");

    let err = request.validate().unwrap_err();
    assert!(err.message.contains("Resume"));
    assert!(err.message.contains("Job description"));
}

#[test]
fn it_ignores_surrounding_whitespace() {
    let padded = format!(
        "   {}\n\n",
        document_of_length(MINIMUM_DOCUMENT_CHARS - 1)
    );
    let request = AnalysisRequest::new(&padded, &document_of_length(MINIMUM_DOCUMENT_CHARS));

    assert!(request.validate().is_err());
}

#[test]
fn it_rejects_whitespace_only_documents() {
    let request = AnalysisRequest::new(&" ".repeat(MINIMUM_DOCUMENT_CHARS * 2), "short");

    assert!(request.validate().is_err());
}
