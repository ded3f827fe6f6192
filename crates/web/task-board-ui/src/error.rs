//! Error types for the page glue

use task_board_api::ApiError;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub type UiResult<T> = Result<T, UiError>;

#[derive(Error, Debug)]
pub enum UiError {
    /// Validation or request failure from the task backend
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A required element is not on the page
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl UiError {
    pub fn missing<S: Into<String>>(what: S) -> Self {
        Self::MissingElement(what.into())
    }

    pub fn dom<S: Into<String>>(msg: S) -> Self {
        Self::Dom(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the failure is an empty-title rejection
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_validation())
    }
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passthrough() {
        let err: UiError = ApiError::validation("empty").into();
        assert!(err.is_validation());
        assert!(!UiError::missing("#taskForm").is_validation());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            UiError::missing("#tasksList").to_string(),
            "Element not found: #tasksList"
        );
    }
}
