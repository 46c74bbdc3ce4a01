use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problem-details body Mailchimp returns with a non-2xx status.
///
/// Every field defaults, so a partial or missing body still yields a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(default)]
#[error("Error {status} {title} ({detail})")]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

impl ErrorResponse {
    /// Decodes an error body, falling back to an empty envelope when the body
    /// is empty or does not match the expected shape.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            if !body.is_empty() {
                log::warn!("Unrecognized error body ({e}), using empty error response");
            }
            Self::default()
        })
    }
}

#[derive(Debug, Error)]
pub enum MailchimpError {
    #[error("API key must be formatted like <key>-<dc>, e.g. xyz-us11")]
    InvalidApiKey,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ErrorResponse),

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl MailchimpError {
    /// The remote error envelope, if the API rejected the request.
    pub const fn api_error(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api(response) => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_display() {
        let err = ErrorResponse {
            kind: "t".to_owned(),
            title: "Not Found".to_owned(),
            status: 404,
            detail: "x".to_owned(),
        };
        assert_eq!(err.to_string(), "Error 404 Not Found (x)");
        assert_eq!(MailchimpError::from(err).to_string(), "Error 404 Not Found (x)");
    }

    #[test]
    fn partial_body_keeps_known_fields() {
        let err = ErrorResponse::from_body(br#"{"title":"Member Exists","status":400}"#);
        assert_eq!(err.title, "Member Exists");
        assert_eq!(err.status, 400);
        assert!(err.kind.is_empty());
        assert!(err.detail.is_empty());
    }

    #[test]
    fn mismatched_body_falls_back_to_empty() {
        assert_eq!(ErrorResponse::from_body(b"<html>bad gateway</html>"), ErrorResponse::default());
        assert_eq!(ErrorResponse::from_body(br#"{"status":"oops"}"#), ErrorResponse::default());
        assert_eq!(ErrorResponse::from_body(b""), ErrorResponse::default());
        assert_eq!(ErrorResponse::default().to_string(), "Error 0  ()");
    }

    #[test]
    fn api_error_accessor() {
        let err = MailchimpError::Api(ErrorResponse { status: 401, ..Default::default() });
        assert_eq!(err.api_error().map(|e| e.status), Some(401));
        assert!(MailchimpError::InvalidApiKey.api_error().is_none());
    }
}
