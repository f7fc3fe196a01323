use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use vexchat_core::{ChatMessage, ChatSession, MessageRole};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{CreateSessionRequest, PostMessageRequest};
use crate::response_types::{ClearedResponse, MessageResponse};

fn required(field: Option<String>, name: &str) -> Result<String, ApiError> {
    field
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{name} is required")))
}

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<ChatSession>, ApiError> {
    let session_id = required(req.session_id, "sessionId")?;
    let session = state.session_service.create_session(&session_id).await?;
    Ok(Json(session))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<ChatSession>, ApiError> {
    state
        .session_service
        .get_session(&session_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Session not found".to_owned()))
}

pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PostMessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let session_id = required(req.session_id, "sessionId")?;
    let content = req
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("content is required".to_owned()))?;
    let role = match req.role.as_deref() {
        None => MessageRole::User,
        Some(raw) => MessageRole::from_str(raw).map_err(ApiError::BadRequest)?,
    };

    let exchange = state.chat_service.post_message(&session_id, &content, role).await?;

    Ok(Json(MessageResponse {
        user_message: exchange.user_message,
        assistant_message: exchange.assistant_message,
        sources: exchange.sources,
        suggested_follow_ups: exchange.suggested_follow_ups,
    }))
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let messages = state.chat_service.list_messages(&session_id).await?;
    Ok(Json(messages))
}

pub async fn clear_messages(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<ClearedResponse>, ApiError> {
    let removed = state.chat_service.clear_messages(&session_id).await?;
    tracing::debug!(session_id = %session_id, removed, "chat history cleared");
    Ok(Json(ClearedResponse { message: "Messages cleared" }))
}
