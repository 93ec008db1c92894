//! Error types for the expense service boundary

use shared::ErrorResponse;
use thiserror::Error;

/// Failure of a single call to the expense service.
///
/// `Display` yields the message shown to the user after the operation
/// prefix, e.g. "Failed to add expense: <message>".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The service answered with a failing status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The response body did not match the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a server error from a failing status and its raw body.
    ///
    /// Uses the body's `error` field when present, otherwise falls back to a
    /// generic transport message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|response| response.error)
            .ok()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        ApiError::Server { status, message }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_error_field() {
        let err = ApiError::from_response(400, r#"{"error": "Amount must be a positive number"}"#);
        assert_eq!(
            err,
            ApiError::Server { status: 400, message: "Amount must be a positive number".to_string() }
        );
    }

    #[test]
    fn test_from_response_falls_back_to_status() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status code 502");

        let err = ApiError::from_response(500, r#"{"error": ""}"#);
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }

    #[test]
    fn test_network_and_decode_messages() {
        assert_eq!(ApiError::Network("Network Error".to_string()).to_string(), "Network Error");

        let decode: ApiError = serde_json::from_str::<shared::Summary>("[1, 2]").unwrap_err().into();
        assert!(decode.to_string().starts_with("Unexpected response from server:"));
        assert!(matches!(decode, ApiError::Decode(_)));
    }
}
