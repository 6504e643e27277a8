//! Error types for Forgotten Prompt

use thiserror::Error;

/// Result type for Forgotten Prompt operations
pub type Result<T> = std::result::Result<T, ForgottenPromptError>;

/// Forgotten Prompt error types
#[derive(Debug, Error)]
pub enum ForgottenPromptError {
    /// Required configuration value missing or unusable
    #[error("{0}")]
    Configuration(String),

    /// Tool input rejected before any network call
    #[error("{0}")]
    Validation(String),

    /// Remote API answered with a non-success status
    #[error("API Error {status}: {body}")]
    Api { status: u16, body: String },

    /// Network failure or unreadable response
    #[error("{0}")]
    Transport(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON-RPC protocol error
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl From<serde_json::Error> for ForgottenPromptError {
    fn from(err: serde_json::Error) -> Self {
        ForgottenPromptError::Serialization(err.to_string())
    }
}

/// JSON-RPC error codes
pub mod error_codes {
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = ForgottenPromptError::Api {
            status: 404,
            body: "not found".into(),
        };
        assert_eq!(err.to_string(), "API Error 404: not found");
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ForgottenPromptError::Validation("Unknown action: dance".into());
        assert_eq!(err.to_string(), "Unknown action: dance");
    }
}
