use std::time::Duration;

use gymplan_domain::AssistantError;

#[derive(thiserror::Error, Debug)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("timeout after {0:?}")]
    Timeout(Duration),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Transient failures that may succeed when the request is sent again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Status { status, .. } => is_retryable_status(*status),
            LlmError::Network(_) | LlmError::Timeout(_) => true,
            LlmError::InvalidResponse(_) | LlmError::Json(_) => false,
        }
    }
}

fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500..=599)
}

impl From<LlmError> for AssistantError {
    fn from(value: LlmError) -> Self {
        AssistantError::Other(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn status(status: u16) -> LlmError {
        LlmError::Status {
            status,
            message: String::new(),
        }
    }

    #[rstest]
    #[case::request_timeout(status(408), true)]
    #[case::rate_limited(status(429), true)]
    #[case::server_error(status(500), true)]
    #[case::unavailable(status(503), true)]
    #[case::bad_request(status(400), false)]
    #[case::unauthorized(status(401), false)]
    #[case::timeout(LlmError::Timeout(Duration::from_secs(30)), true)]
    #[case::invalid_response(LlmError::InvalidResponse("empty".to_string()), false)]
    #[case::json(LlmError::Json(serde_json::from_str::<u8>("x").unwrap_err()), false)]
    fn test_is_retryable(#[case] error: LlmError, #[case] expected: bool) {
        assert_eq!(error.is_retryable(), expected);
    }

    #[test]
    fn test_into_assistant_error() {
        assert!(matches!(
            AssistantError::from(status(401)),
            AssistantError::Other(error) if error.to_string() == "API error 401: "
        ));
    }
}
