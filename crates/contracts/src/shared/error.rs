use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the site's data layer.
///
/// Views never let these escape: they either fall back to defaults or show
/// the `Display` text inline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),
}

impl SiteError {
    /// Build a `Status` error from a non-2xx response body.
    ///
    /// Prefers the JSON `message` field, then the JSON text itself, then the
    /// raw body; an empty body falls back to `status_text`.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = match serde_json::from_str::<Value>(body) {
            Ok(json) => match json.get("message").and_then(Value::as_str) {
                Some(m) => m.to_string(),
                None => json.to_string(),
            },
            Err(_) if body.trim().is_empty() => status_text.to_string(),
            Err(_) => body.to_string(),
        };
        SiteError::Status { status, message }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(e: serde_json::Error) -> Self {
        SiteError::Decode(e.to_string())
    }
}

impl From<toml::de::Error> for SiteError {
    fn from(e: toml::de::Error) -> Self {
        SiteError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_message_is_preferred() {
        let err = SiteError::from_response(422, "Unprocessable", r#"{"message":"phone is invalid"}"#);
        assert_eq!(err.to_string(), "Server returned 422: phone is invalid");
    }

    #[test]
    fn json_without_message_is_echoed() {
        let err = SiteError::from_response(500, "Internal", r#"{"error":"boom"}"#);
        assert_eq!(
            err,
            SiteError::Status {
                status: 500,
                message: r#"{"error":"boom"}"#.to_string()
            }
        );
    }

    #[test]
    fn plain_and_empty_bodies() {
        let err = SiteError::from_response(502, "Bad Gateway", "upstream down");
        assert_eq!(err.to_string(), "Server returned 502: upstream down");
        let err = SiteError::from_response(404, "Not Found", "");
        assert_eq!(err.to_string(), "Server returned 404: Not Found");
    }
}
