//! In-memory storage backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use vexchat_core::{ChatMessage, ChatSession, NewMessage, NewSession};

use crate::error::StorageError;
use crate::traits::{MessageStore, SessionStore};

#[derive(Debug, Default)]
struct Inner {
    /// Sessions keyed by external id for O(1) lookup. External ids are
    /// unique; creation rejects duplicates.
    sessions: HashMap<String, ChatSession>,
    messages: HashMap<i64, ChatMessage>,
    next_session_id: i64,
    next_message_id: i64,
}

/// Process-lifetime storage over guarded maps. Each operation takes the lock
/// once, so individual reads and writes are atomic under the multi-threaded
/// runtime.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStorage {
    async fn create_session(&self, session: NewSession) -> Result<ChatSession, StorageError> {
        let mut inner = self.inner.write().await;
        if inner.sessions.contains_key(&session.session_id) {
            return Err(StorageError::Duplicate(format!(
                "session '{}' already exists",
                session.session_id
            )));
        }
        inner.next_session_id += 1;
        let record = ChatSession {
            id: inner.next_session_id,
            session_id: session.session_id.clone(),
            created_at: Utc::now(),
        };
        inner.sessions.insert(session.session_id, record.clone());
        tracing::debug!(session_id = %record.session_id, id = record.id, "session created");
        Ok(record)
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<ChatSession>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.sessions.get(session_id).cloned())
    }
}

#[async_trait]
impl MessageStore for MemoryStorage {
    async fn add_message(&self, message: NewMessage) -> Result<ChatMessage, StorageError> {
        let mut inner = self.inner.write().await;
        inner.next_message_id += 1;
        let record = ChatMessage {
            id: inner.next_message_id,
            session_id: message.session_id,
            role: message.role,
            content: message.content,
            metadata: message.metadata,
            timestamp: Utc::now(),
        };
        inner.messages.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, StorageError> {
        let inner = self.inner.read().await;
        let mut messages: Vec<ChatMessage> = inner
            .messages
            .values()
            .filter(|m| m.session_id == session_id)
            .cloned()
            .collect();
        // Ids break ties between messages stamped in the same instant.
        messages.sort_by_key(|m| (m.timestamp, m.id));
        Ok(messages)
    }

    async fn delete_messages(&self, session_id: &str) -> Result<usize, StorageError> {
        let mut inner = self.inner.write().await;
        let before = inner.messages.len();
        inner.messages.retain(|_, m| m.session_id != session_id);
        Ok(before - inner.messages.len())
    }
}
