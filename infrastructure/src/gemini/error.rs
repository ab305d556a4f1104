//! Error types for the Gemini adapter

use quill_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("Request timeout")]
    Timeout,
}

impl From<reqwest::Error> for GeminiError {
    fn from(error: reqwest::Error) -> Self {
        GeminiError::Http(error.without_url())
    }
}

impl From<GeminiError> for GatewayError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::MissingApiKey(_) | GeminiError::ClientBuild(_) => {
                GatewayError::SessionError(error.to_string())
            }
            GeminiError::Http(ref e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(ref e) if e.is_connect() => {
                GatewayError::ConnectionError(error.to_string())
            }
            GeminiError::Timeout => GatewayError::Timeout,
            GeminiError::Blocked(reason) => GatewayError::Blocked(reason),
            GeminiError::Http(_)
            | GeminiError::ParseError { .. }
            | GeminiError::Api { .. } => GatewayError::RequestFailed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_setup_failure() {
        let error: GatewayError = GeminiError::MissingApiKey("GEMINI_API_KEY".into()).into();
        assert_eq!(
            error,
            GatewayError::SessionError(
                "API key not found: set the GEMINI_API_KEY environment variable".into()
            )
        );
    }

    #[test]
    fn test_api_error_is_request_failure() {
        let error: GatewayError = GeminiError::Api {
            status: 429,
            message: "RESOURCE_EXHAUSTED: quota".into(),
        }
        .into();
        assert_eq!(
            error,
            GatewayError::RequestFailed("API error (HTTP 429): RESOURCE_EXHAUSTED: quota".into())
        );
    }

    #[test]
    fn test_blocked_and_timeout() {
        assert_eq!(
            GatewayError::from(GeminiError::Blocked("SAFETY".into())),
            GatewayError::Blocked("SAFETY".into())
        );
        assert_eq!(GatewayError::from(GeminiError::Timeout), GatewayError::Timeout);
    }
}
