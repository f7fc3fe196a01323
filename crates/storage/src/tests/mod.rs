use vexchat_core::{MessageRole, NewMessage, NewSession};

use crate::MemoryStorage;

mod session_tests;

fn create_test_storage() -> MemoryStorage {
    MemoryStorage::new()
}

fn new_session(session_id: &str) -> NewSession {
    NewSession { session_id: session_id.to_owned() }
}

fn new_user_message(session_id: &str, content: &str) -> NewMessage {
    NewMessage {
        session_id: session_id.to_owned(),
        role: MessageRole::User,
        content: content.to_owned(),
        metadata: None,
    }
}
