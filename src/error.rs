//! Error types for Drafter
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::llm::LlmError;

/// All error types that can escape a drafting session
#[derive(Debug, Error)]
pub enum DrafterError {
    /// Invalid state transition or operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Model invocation failed
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Standard input reached end-of-file while a line was expected
    #[error("Input closed before the document was saved")]
    InputClosed,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Drafter operations
pub type Result<T> = std::result::Result<T, DrafterError>;
