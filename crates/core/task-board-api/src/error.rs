//! Error types for the task board client

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything that can go wrong between the page and the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected before any request was made
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Transport failure (connection refused, fetch aborted, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a status error
    pub fn status<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Whether the error was raised locally, before touching the network
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_local() {
        assert!(ApiError::validation("title is empty").is_validation());
        assert!(!ApiError::status(500, "boom").is_validation());
    }

    #[test]
    fn test_status_display() {
        let err = ApiError::status(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Unexpected status 502: Bad Gateway");
    }
}
