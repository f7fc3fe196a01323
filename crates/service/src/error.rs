//! Typed error enum for the service layer.
//!
//! Unifies storage and LLM failures into a single error type, so callers can
//! match on specific failure modes instead of downcasting opaque boxes.

use thiserror::Error;
use vexchat_llm::LlmError;
use vexchat_storage::StorageError;

/// Service-layer error unifying storage and LLM failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (not found, duplicate).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Completion API call failed. Terminal for the turn; never retried.
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// Caller provided invalid input (empty text, malformed data).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }

    /// Whether this error represents a duplicate/conflict.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}
