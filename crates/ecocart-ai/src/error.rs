//! Error taxonomy for the analysis service calls.

use thiserror::Error;

/// Errors surfaced by the Gemini client.
#[derive(Error, Debug)]
pub enum AiError {
    /// No credential was injected at startup.
    #[error("AI service is not configured: no API key")]
    MissingApiKey,

    #[error("AI service authentication failed")]
    AuthFailed,

    #[error("AI service quota exceeded")]
    RateLimited,

    #[error("AI model configuration error: {0}")]
    ModelNotFound(String),

    #[error("no analysis received from AI service")]
    EmptyResponse,

    #[error("AI provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for AI client operations.
pub type AiResult<T> = Result<T, AiError>;

/// Classify a non-success provider response: by status code first, then
/// by the provider's well-known message substrings.
pub fn classify_provider_error(status: u16, message: &str) -> AiError {
    let lower = message.to_lowercase();
    if status == 401 || status == 403 || lower.contains("api key") {
        AiError::AuthFailed
    } else if status == 429 || lower.contains("quota") || lower.contains("rate limit") {
        AiError::RateLimited
    } else if lower.contains("not found") {
        AiError::ModelNotFound(message.to_string())
    } else {
        AiError::Provider {
            status,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_by_status_and_message() {
        assert!(matches!(
            classify_provider_error(401, "unauthenticated"),
            AiError::AuthFailed
        ));
        assert!(matches!(
            classify_provider_error(400, "API key not valid. Please pass a valid API key."),
            AiError::AuthFailed
        ));
    }

    #[test]
    fn test_quota_errors() {
        assert!(matches!(
            classify_provider_error(429, "slow down"),
            AiError::RateLimited
        ));
        assert!(matches!(
            classify_provider_error(400, "You exceeded your current quota."),
            AiError::RateLimited
        ));
    }

    #[test]
    fn test_unknown_model() {
        assert!(matches!(
            classify_provider_error(404, "models/gemini-nope is not found"),
            AiError::ModelNotFound(_)
        ));
    }

    #[test]
    fn test_everything_else_stays_a_provider_error() {
        assert!(matches!(
            classify_provider_error(503, "backend overloaded"),
            AiError::Provider { status: 503, .. }
        ));
    }
}
