//! Storage trait abstraction.
//!
//! Async domain traits for session and message operations, so services take
//! an injected backend instead of reaching for ambient shared state.

use async_trait::async_trait;
use vexchat_core::{ChatMessage, ChatSession, NewMessage, NewSession};

use crate::error::StorageError;

/// Session lifecycle operations.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a session, assigning the next internal id and a creation
    /// timestamp. Fails with [`StorageError::Duplicate`] if the external id
    /// is already taken.
    async fn create_session(&self, session: NewSession) -> Result<ChatSession, StorageError>;

    /// Get a session by its external id. Absence is `None`, not an error.
    async fn get_session(&self, session_id: &str) -> Result<Option<ChatSession>, StorageError>;
}

/// Message log operations.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a message, assigning the next internal id and a timestamp.
    async fn add_message(&self, message: NewMessage) -> Result<ChatMessage, StorageError>;

    /// All messages for an external session id, ascending by creation time.
    /// Possibly empty.
    async fn list_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, StorageError>;

    /// Delete every message for an external session id. Returns the number
    /// removed; deleting from an unknown session is a no-op.
    async fn delete_messages(&self, session_id: &str) -> Result<usize, StorageError>;
}
