//! Error types for generation.

use thiserror::Error;

use forge_llm::LlmError;

/// Result type alias for generator operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur while generating or persisting artifacts.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Model generation failed: {0}")]
    Llm(#[from] LlmError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
