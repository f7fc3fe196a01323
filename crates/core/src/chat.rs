use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat session keyed by a client-chosen external id.
///
/// Immutable after creation; lives only for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Internal id assigned by the store.
    pub id: i64,
    /// Opaque external id chosen by the client. Unique across sessions.
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a session; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub session_id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::str::FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(format!("invalid message role: {other}")),
        }
    }
}

/// Structured payload attached to assistant messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub suggested_follow_ups: Vec<String>,
}

/// One stored message turn. Immutable after creation; deleted only in bulk
/// when a session's history is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    /// External session id. Not enforced against the session store.
    pub session_id: String,
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
    pub timestamp: DateTime<Utc>,
}

/// Input for appending a message; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub session_id: String,
    pub role: MessageRole,
    pub content: String,
    pub metadata: Option<MessageMetadata>,
}

/// One entry of the in-memory conversation window sent to the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    pub role: MessageRole,
    pub content: String,
}

impl Turn {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: MessageRole::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Assistant, content: content.into() }
    }
}
