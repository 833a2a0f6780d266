use anyhow::Result;

use super::Matcher;
use crate::domain::models::AnalysisRequest;
use crate::domain::models::AnalysisResult;
use crate::domain::models::Backend;
use crate::domain::models::ErrorKind;

impl Matcher {
    fn with_url(url: String) -> Matcher {
        return Matcher {
            url,
            timeout: "200".to_string(),
        };
    }
}

fn request_fixture() -> AnalysisRequest {
    return AnalysisRequest::new("resume text", "job description text");
}

fn closed_port_url() -> String {
    // Bind to an ephemeral port and drop the listener so a connection to it
    // is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    return format!("http://127.0.0.1:{port}");
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;

    let backend = Matcher::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/health")
        .with_status(500)
        .create_async()
        .await;

    let backend = Matcher::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_err());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_analyzes_documents() -> Result<()> {
    let body = r#"{
        "match_percentage": 85,
        "matched_skills": ["Python", "FastAPI"],
        "missing_skills": [],
        "improvement_suggestions": ["Add cloud experience"],
        "analysis_id": "65ab12"
    }"#;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let backend = Matcher::with_url(server.url());
    let res = backend.analyze(&request_fixture()).await;

    mock.assert_async().await;

    let expected = AnalysisResult {
        match_percentage: 85,
        matched_skills: vec!["Python".to_string(), "FastAPI".to_string()],
        missing_skills: vec![],
        improvement_suggestions: vec!["Add cloud experience".to_string()],
    };
    assert_eq!(res.unwrap(), expected);

    return Ok(());
}

#[tokio::test]
async fn it_sends_the_documents_as_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "resume_text": "resume text",
            "job_description_text": "job description text",
        })))
        .with_status(200)
        .with_body(
            r#"{"match_percentage": 1, "matched_skills": [], "missing_skills": [], "improvement_suggestions": []}"#,
        )
        .create_async()
        .await;

    let backend = Matcher::with_url(server.url());
    let res = backend.analyze(&request_fixture()).await;

    assert!(res.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_classifies_rejections_as_server_errors() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze")
        .with_status(400)
        .with_body(r#"{"detail": "Resume must be at least 50 characters long"}"#)
        .create_async()
        .await;

    let backend = Matcher::with_url(server.url());
    let err = backend.analyze(&request_fixture()).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::ServerError);
    assert_eq!(err.message, "Resume must be at least 50 characters long");
}

#[tokio::test]
async fn it_falls_back_to_the_status_code_on_empty_error_bodies() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze")
        .with_status(500)
        .create_async()
        .await;

    let backend = Matcher::with_url(server.url());
    let err = backend.analyze(&request_fixture()).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::ServerError);
    assert_eq!(err.message, "Server error: 500");
}

#[tokio::test]
async fn it_classifies_refused_connections_as_network_errors() {
    let backend = Matcher::with_url(closed_port_url());
    let err = backend.analyze(&request_fixture()).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Network);
    assert!(err.message.contains("Make sure the scoring service is running"));
}

#[tokio::test]
async fn it_rejects_malformed_success_bodies() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(r#"{"match_percentage": "high"}"#)
        .create_async()
        .await;

    let backend = Matcher::with_url(server.url());
    let err = backend.analyze(&request_fixture()).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::Unknown);
}

#[tokio::test]
async fn it_rejects_bodies_with_missing_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(r#"{"match_percentage": 85}"#)
        .create_async()
        .await;

    let backend = Matcher::with_url(server.url());
    let err = backend.analyze(&request_fixture()).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::Unknown);
}
