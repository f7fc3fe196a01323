//! Service layer for vexchat
//!
//! Centralizes business logic between the HTTP handlers and storage/llm.

mod chat_service;
mod error;
mod knowledge_service;
mod session_service;
mod sources;

#[cfg(test)]
mod chat_service_tests;

pub use chat_service::{ChatReply, ChatService, MessageExchange};
pub use error::ServiceError;
pub use knowledge_service::KnowledgeService;
pub use session_service::SessionService;
pub use sources::extract_relevant_sources;
