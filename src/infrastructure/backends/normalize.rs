#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

use serde_derive::Deserialize;

use crate::domain::models::ErrorInfo;

/// Error payloads differ between service versions, so every known field is
/// modeled and the first populated one wins.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

/// Maps a non-2xx response to a server error. Field priority is `detail`,
/// then `error`, then `message`; a body with none of them populated falls
/// back to the status code.
pub fn classify_response(status: u16, body: &str) -> ErrorInfo {
    let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
    let message = [parsed.detail, parsed.error, parsed.message]
        .into_iter()
        .flatten()
        .find(|field| return !field.trim().is_empty());

    if let Some(message) = message {
        return ErrorInfo::server(&message);
    }

    return ErrorInfo::server(&format!("Server error: {status}"));
}

/// Maps a failure to get any response at all. Requests that never made it
/// out of the client are unknowns, everything in between is a network
/// problem the user can act on.
pub fn classify_transport(err: &reqwest::Error, url: &str) -> ErrorInfo {
    if err.is_builder() {
        return ErrorInfo::unknown(&err.to_string());
    }

    if err.is_connect() || err.is_timeout() || err.is_request() {
        return ErrorInfo::network(&format!(
            "Network error: could not connect to {url}. Make sure the scoring service is running."
        ));
    }

    return ErrorInfo::unknown(&err.to_string());
}

/// Maps a 2xx response whose body does not decode to the expected shape.
/// A partially populated result is never returned.
pub fn classify_decode(err: &serde_json::Error) -> ErrorInfo {
    return ErrorInfo::unknown(&format!(
        "The scoring service returned an unexpected response: {err}"
    ));
}
