//! Core types for vexchat
//!
//! This crate contains domain types shared across all other crates, plus the
//! static VEX knowledge catalog.

mod chat;
pub mod constants;
mod json_utils;
pub mod knowledge;

pub use chat::*;
pub use constants::*;
pub use json_utils::strip_markdown_json;
pub use knowledge::{CompetitionLevel, KnowledgeBase, Resource, TopicInfo};
