//! Error types for model-service calls

use thiserror::Error;

/// Result type for model-service operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// Errors raised while talking to the model service
#[derive(Error, Debug)]
pub enum LLMError {
    /// Non-success HTTP status not covered by a more specific variant
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Invalid API key or authentication failed
    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// The service rejected the request body
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Transport-level failure (DNS, TLS, timeout, ...)
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The response body did not have the expected shape
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
