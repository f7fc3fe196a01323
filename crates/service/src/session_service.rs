use std::sync::Arc;

use vexchat_core::{ChatSession, NewSession};
use vexchat_storage::{MemoryStorage, SessionStore};

use crate::error::ServiceError;

pub struct SessionService {
    storage: Arc<MemoryStorage>,
}

impl SessionService {
    #[must_use]
    pub const fn new(storage: Arc<MemoryStorage>) -> Self {
        Self { storage }
    }

    /// Create a session for a client-chosen external id.
    ///
    /// Blank ids are invalid input; an already-taken id surfaces as a
    /// duplicate error.
    pub async fn create_session(&self, session_id: &str) -> Result<ChatSession, ServiceError> {
        if session_id.trim().is_empty() {
            return Err(ServiceError::InvalidInput("sessionId must not be empty".to_owned()));
        }
        Ok(self
            .storage
            .create_session(NewSession { session_id: session_id.to_owned() })
            .await?)
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Option<ChatSession>, ServiceError> {
        Ok(self.storage.get_session(session_id).await?)
    }
}
