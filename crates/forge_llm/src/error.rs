//! Error types for model access.

use thiserror::Error;

/// Result type alias for model operations.
pub type LlmResult<T> = Result<T, LlmError>;

/// Errors from configuration or the Gemini API.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("GEMINI_API_KEY is not set. Add it to your environment")]
    MissingApiKey,

    #[error("Gemini API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Gemini returned no candidates")]
    EmptyResponse,

    #[error("Failed to parse Gemini response: {0}")]
    InvalidResponse(String),
}
