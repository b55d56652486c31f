//! API Error Types

use serde::Deserialize;
use thiserror::Error;

/// Failures of a single API round trip
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network failure or unexpected server response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Referenced identifier does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server rejected the submitted input
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body sent by the server, e.g. `{"error": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("HTTP {}", status));

        match status {
            404 => ApiError::NotFound(detail),
            400..=499 => ApiError::Validation(detail),
            _ => ApiError::Transport(detail),
        }
    }

    /// Collapse into a transport failure, keeping the detail
    pub fn into_transport(self) -> Self {
        match self {
            ApiError::NotFound(msg) | ApiError::Validation(msg) => ApiError::Transport(msg),
            other => other,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(format!("Malformed response: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from_status(400, ""), ApiError::Validation(_)));
        assert!(matches!(ApiError::from_status(422, ""), ApiError::Validation(_)));
        assert!(matches!(ApiError::from_status(500, ""), ApiError::Transport(_)));
        assert!(matches!(ApiError::from_status(503, ""), ApiError::Transport(_)));
    }

    #[test]
    fn test_error_body_detail() {
        let err = ApiError::from_status(400, r#"{"error":"price must be greater than 0"}"#);
        assert_eq!(err, ApiError::Validation("price must be greater than 0".to_string()));

        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(err, ApiError::Transport("HTTP 500".to_string()));
    }

    #[test]
    fn test_into_transport() {
        let err = ApiError::NotFound("gone".to_string()).into_transport();
        assert_eq!(err, ApiError::Transport("gone".to_string()));
    }
}
