//! Error types for explanation requests.

use thiserror::Error;

/// Result type for explanation requests.
pub type ExplainResult<T> = Result<T, ExplainError>;

/// Failures talking to the text-generation service.
///
/// None of these reach HTTP callers; they are rendered into the fallback
/// explanation instead.
#[derive(Debug, Error)]
pub enum ExplainError {
    /// Transport failure, including timeouts.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a chat completion.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The completion carried no choices.
    #[error("response contained no choices")]
    NoChoices,

    /// The credential cannot be used as a header value.
    #[error("invalid api key header")]
    InvalidApiKey,
}
