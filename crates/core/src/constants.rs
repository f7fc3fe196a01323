//! Shared constants for vexchat.
//!
//! Centralizes the completion parameters so they are not duplicated across
//! crates.

/// Maximum number of conversation turns retained per session. Older turns are
/// dropped after each completed exchange; the stored message log is unbounded.
pub const HISTORY_WINDOW: usize = 20;

/// Token ceiling for the primary reply completion.
pub const REPLY_MAX_TOKENS: u32 = 1000;

/// Sampling temperature for the primary reply completion.
pub const REPLY_TEMPERATURE: f32 = 0.7;

/// Token ceiling for the best-effort follow-up suggestion completion.
pub const FOLLOW_UP_MAX_TOKENS: u32 = 200;

/// Reply used when the model returns blank content.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't generate a response.";
