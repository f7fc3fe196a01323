//! Completion API client for vexchat reply generation and follow-up
//! suggestions.

mod ai_types;
mod client;
mod error;
mod follow_ups;
mod reply;


pub use client::{DEFAULT_MODEL, LlmClient};
pub use error::LlmError;
