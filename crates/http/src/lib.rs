//! HTTP API server for vexchat.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use vexchat_service::{ChatService, KnowledgeService, SessionService};

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Reply orchestration and the message log.
    pub chat_service: Arc<ChatService>,
    /// Session creation and lookup.
    pub session_service: Arc<SessionService>,
    /// Read-only knowledge catalog queries.
    pub knowledge_service: Arc<KnowledgeService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/chat/session", post(handlers::chat::create_session))
        .route("/api/chat/session/{sessionId}", get(handlers::chat::get_session))
        .route("/api/chat/message", post(handlers::chat::post_message))
        .route(
            "/api/chat/messages/{sessionId}",
            get(handlers::chat::list_messages).delete(handlers::chat::clear_messages),
        )
        .route("/api/vex/competitions", get(handlers::knowledge::competition_levels))
        .route("/api/vex/resources", get(handlers::knowledge::resources))
        .route("/api/vex/info/{topic}", get(handlers::knowledge::topic_info))
        .route("/api/vex/gamemanuals", get(handlers::knowledge::game_manuals))
        // The browser client is served from a different origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
