//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, duplicate) instead of
//! downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Record not found for an expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// External session id already exists.
    #[error("duplicate: {0}")]
    Duplicate(String),
}

impl StorageError {
    /// Whether this error is a uniqueness violation.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// Whether this error is a not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
