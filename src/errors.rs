use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum QuizError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("No content: {0}")]
    EmptyResult(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Transient failure: {0}")]
    Transient(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuizError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QuizError::InvalidInput(_) => "INVALID_INPUT",
            QuizError::InvalidState(_) => "INVALID_STATE",
            QuizError::EmptyResult(_) => "EMPTY_RESULT",
            QuizError::NotFound(_) => "NOT_FOUND",
            QuizError::Unauthorized(_) => "UNAUTHORIZED",
            QuizError::Transient(_) => "TRANSIENT_FAILURE",
            QuizError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller may safely retry the same operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuizError::Transient(_))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub code: &'static str,
}

impl From<&QuizError> for ErrorReport {
    fn from(err: &QuizError) -> Self {
        ErrorReport {
            error: err.to_string(),
            code: err.error_code(),
        }
    }
}

impl From<reqwest::Error> for QuizError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            QuizError::Internal(format!("response decode error: {}", err))
        } else {
            QuizError::Transient(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for QuizError {
    fn from(err: validator::ValidationErrors) -> Self {
        QuizError::InvalidInput(err.to_string())
    }
}

pub type QuizResult<T> = Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            QuizError::InvalidInput("test".into()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            QuizError::InvalidState("test".into()).error_code(),
            "INVALID_STATE"
        );
        assert_eq!(
            QuizError::EmptyResult("test".into()).error_code(),
            "EMPTY_RESULT"
        );
        assert_eq!(
            QuizError::Transient("test".into()).error_code(),
            "TRANSIENT_FAILURE"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = QuizError::EmptyResult("no questions available".into());
        assert_eq!(err.to_string(), "No content: no questions available");
    }

    #[test]
    fn test_only_transient_is_retryable() {
        assert!(QuizError::Transient("connection reset".into()).is_retryable());
        assert!(!QuizError::InvalidInput("bad answer".into()).is_retryable());
        assert!(!QuizError::InvalidState("already answered".into()).is_retryable());
        assert!(!QuizError::EmptyResult("empty".into()).is_retryable());
    }

    #[test]
    fn test_error_report_carries_code() {
        let err = QuizError::Unauthorized("token expired".into());
        let report = ErrorReport::from(&err);
        assert_eq!(report.code, "UNAUTHORIZED");
        assert_eq!(report.error, "Unauthorized: token expired");
    }
}
