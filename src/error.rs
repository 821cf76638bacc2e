//! Nexus AI error types

use std::time::Duration;

/// Nexus AI error types
#[derive(Debug, thiserror::Error)]
pub enum NexusAiError {
    // Transport/endpoint errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("endpoint timed out after {0:?}")]
    Timeout(Duration),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Success status but no usable text anywhere in the response envelope.
    #[error("empty response from model")]
    EmptyResponse,

    // Configuration errors
    /// Every endpoint in the fallback list has been attempted and failed.
    /// Callers treat this as "no remote content" and substitute the
    /// offline template.
    #[error("all endpoints exhausted")]
    NoEndpoint,

    #[error("configuration error: {0}")]
    Configuration(String),

    // Cache layer errors. Absorbed at the gateway; never surfaced to callers.
    #[error("storage error: {0}")]
    Storage(String),
}

impl NexusAiError {
    /// Whether this error came from the remote side of a single endpoint
    /// attempt (transport, status, or envelope), as opposed to local
    /// configuration or storage.
    ///
    /// Every remote-side error moves the executor on to the next endpoint;
    /// this classification exists for logging and tests, not control flow.
    pub fn is_endpoint_failure(&self) -> bool {
        matches!(
            self,
            NexusAiError::Http(_)
                | NexusAiError::Api { .. }
                | NexusAiError::RateLimited { .. }
                | NexusAiError::AuthenticationFailed
                | NexusAiError::Timeout(_)
                | NexusAiError::Json(_)
                | NexusAiError::EmptyResponse
        )
    }

    /// Extract the `retry_after` hint from a rate-limit error.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            NexusAiError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for Nexus AI operations
pub type Result<T> = std::result::Result<T, NexusAiError>;
