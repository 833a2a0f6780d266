use super::classify_decode;
use super::classify_response;
use crate::domain::models::AnalysisResult;
use crate::domain::models::ErrorKind;

#[test]
fn it_takes_the_detail_field_first() {
    let info = classify_response(422, r#"{"detail": "bad input"}"#);

    assert_eq!(info.kind, ErrorKind::ServerError);
    assert_eq!(info.message, "bad input");
}

#[test]
fn it_prefers_detail_over_error_and_message() {
    let info = classify_response(
        500,
        r#"{"message": "last", "error": "middle", "detail": "first"}"#,
    );

    assert_eq!(info.message, "first");
}

#[test]
fn it_falls_back_to_the_error_field() {
    let info = classify_response(500, r#"{"error": "boom", "message": "ignored"}"#);

    assert_eq!(info.message, "boom");
}

#[test]
fn it_falls_back_to_the_message_field() {
    let info = classify_response(503, r#"{"message": "try later"}"#);

    assert_eq!(info.message, "try later");
}

#[test]
fn it_reports_the_status_code_when_no_field_is_populated() {
    let info = classify_response(500, "{}");

    assert_eq!(info.kind, ErrorKind::ServerError);
    assert_eq!(info.message, "Server error: 500");
}

#[test]
fn it_skips_empty_fields() {
    let info = classify_response(500, r#"{"detail": "", "error": "boom"}"#);

    assert_eq!(info.message, "boom");
}

#[test]
fn it_handles_bodies_that_are_not_json() {
    let info = classify_response(502, "<html>Bad Gateway</html>");

    assert_eq!(info.kind, ErrorKind::ServerError);
    assert_eq!(info.message, "Server error: 502");
}

#[test]
fn it_classifies_decode_failures_as_unknown() {
    let err = serde_json::from_str::<AnalysisResult>(r#"{"match_percentage": "high"}"#)
        .unwrap_err();

    let info = classify_decode(&err);
    assert_eq!(info.kind, ErrorKind::Unknown);
    assert!(info.message.contains("unexpected response"));
}
