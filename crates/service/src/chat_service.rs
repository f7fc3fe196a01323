use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use vexchat_core::{
    ChatMessage, HISTORY_WINDOW, KnowledgeBase, MessageMetadata, MessageRole, NewMessage, Turn,
};
use vexchat_llm::LlmClient;
use vexchat_storage::{MemoryStorage, MessageStore};

use crate::error::ServiceError;
use crate::sources::extract_relevant_sources;

/// Result of one orchestrated turn.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub response: String,
    pub sources: Vec<String>,
    pub suggested_follow_ups: Vec<String>,
}

/// Stored user/assistant message pair plus the auxiliary lists, as returned
/// to the HTTP layer.
#[derive(Debug, Clone)]
pub struct MessageExchange {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
    pub sources: Vec<String>,
    pub suggested_follow_ups: Vec<String>,
}

type History = Arc<Mutex<Vec<Turn>>>;

/// Orchestrates replies: conversation windows, the completion API, follow-up
/// suggestions, and keyword source attribution.
///
/// The per-session window is the sole source of truth for model context; the
/// message store keeps the full unbounded log. The two diverge by design once
/// a session passes [`HISTORY_WINDOW`] turns.
pub struct ChatService {
    storage: Arc<MemoryStorage>,
    llm: Arc<LlmClient>,
    system_prompt: String,
    /// One mutex per session id. Holding it across the turn serializes
    /// concurrent messages for the same session; different sessions proceed
    /// independently.
    histories: RwLock<HashMap<String, History>>,
}

impl ChatService {
    #[must_use]
    pub fn new(storage: Arc<MemoryStorage>, llm: Arc<LlmClient>) -> Self {
        Self {
            storage,
            llm,
            system_prompt: KnowledgeBase::new().system_prompt(),
            histories: RwLock::new(HashMap::new()),
        }
    }

    /// Produce an assistant reply for a new user message.
    ///
    /// The user turn joins the window before the completion call; the context
    /// sent upstream is capped at the most recent [`HISTORY_WINDOW`] entries,
    /// and the window itself is truncated to that cap after the assistant
    /// turn is appended. A completion failure is terminal for the turn and
    /// leaves the window exactly as it was.
    ///
    /// Follow-up suggestions are best-effort: their failure degrades to an
    /// empty list. Source extraction is pure and cannot fail.
    pub async fn generate_response(
        &self,
        session_id: &str,
        user_message: &str,
    ) -> Result<ChatReply, ServiceError> {
        let history = self.session_history(session_id).await;
        let mut window = history.lock().await;

        window.push(Turn::user(user_message));
        let start = window.len().saturating_sub(HISTORY_WINDOW);

        let response = match self.llm.generate_reply(&self.system_prompt, &window[start..]).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(session_id, error = %e, "reply generation failed");
                window.pop();
                return Err(e.into());
            },
        };

        window.push(Turn::assistant(response.clone()));
        truncate_window(&mut window);
        drop(window);

        let suggested_follow_ups =
            match self.llm.suggest_follow_ups(user_message, &response).await {
                Ok(suggestions) => suggestions,
                Err(e) => {
                    tracing::warn!(session_id, error = %e, "follow-up suggestion failed");
                    Vec::new()
                },
            };

        let sources = extract_relevant_sources(user_message);

        Ok(ChatReply { response, sources, suggested_follow_ups })
    }

    /// Store the inbound message, orchestrate the reply, store the assistant
    /// message with its metadata.
    ///
    /// The inbound message is persisted before orchestration; a completion
    /// failure still fails the request but leaves that message in the log.
    pub async fn post_message(
        &self,
        session_id: &str,
        content: &str,
        role: MessageRole,
    ) -> Result<MessageExchange, ServiceError> {
        let user_message = self
            .storage
            .add_message(NewMessage {
                session_id: session_id.to_owned(),
                role,
                content: content.to_owned(),
                metadata: None,
            })
            .await?;

        let reply = self.generate_response(session_id, content).await?;

        let assistant_message = self
            .storage
            .add_message(NewMessage {
                session_id: session_id.to_owned(),
                role: MessageRole::Assistant,
                content: reply.response.clone(),
                metadata: Some(MessageMetadata {
                    sources: reply.sources.clone(),
                    suggested_follow_ups: reply.suggested_follow_ups.clone(),
                }),
            })
            .await?;

        Ok(MessageExchange {
            user_message,
            assistant_message,
            sources: reply.sources,
            suggested_follow_ups: reply.suggested_follow_ups,
        })
    }

    /// Full stored message log for a session, oldest first.
    pub async fn list_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, ServiceError> {
        Ok(self.storage.list_messages(session_id).await?)
    }

    /// Delete the stored messages and drop the conversation window.
    /// Returns the number of stored messages removed.
    pub async fn clear_messages(&self, session_id: &str) -> Result<usize, ServiceError> {
        let removed = self.storage.delete_messages(session_id).await?;
        self.clear_history(session_id).await;
        Ok(removed)
    }

    /// Drop the in-memory conversation window for a session. Idempotent.
    pub async fn clear_history(&self, session_id: &str) {
        self.histories.write().await.remove(session_id);
    }

    /// Snapshot of the current conversation window. Empty for unknown
    /// sessions.
    pub async fn history(&self, session_id: &str) -> Vec<Turn> {
        let history = {
            let map = self.histories.read().await;
            map.get(session_id).map(Arc::clone)
        };
        match history {
            Some(history) => history.lock().await.clone(),
            None => Vec::new(),
        }
    }

    async fn session_history(&self, session_id: &str) -> History {
        let mut map = self.histories.write().await;
        Arc::clone(map.entry(session_id.to_owned()).or_default())
    }
}

fn truncate_window(window: &mut Vec<Turn>) {
    let excess = window.len().saturating_sub(HISTORY_WINDOW);
    if excess > 0 {
        window.drain(..excess);
    }
}
