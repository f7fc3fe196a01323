//! Response types (Serialize)

use serde::Serialize;

use vexchat_core::ChatMessage;
use vexchat_core::knowledge::TopicInfo;

/// Body returned by `POST /api/chat/message`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
    pub sources: Vec<String>,
    pub suggested_follow_ups: Vec<String>,
}

/// Confirmation for `DELETE /api/chat/messages/{sessionId}`.
#[derive(Debug, Serialize)]
pub struct ClearedResponse {
    pub message: &'static str,
}

/// The two fixed game-manual records, keyed the way the client expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameManualsResponse {
    pub v5_push_back: Option<TopicInfo>,
    pub iq_mix_match: Option<TopicInfo>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
