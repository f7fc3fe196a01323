use std::sync::Arc;

use vexchat_core::{HISTORY_WINDOW, MessageRole};
use vexchat_llm::LlmClient;
use vexchat_storage::MemoryStorage;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{ChatService, ServiceError};

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": {
                "content": content,
                "role": "assistant"
            }
        }]
    })
}

fn test_service(server: &MockServer) -> ChatService {
    let storage = Arc::new(MemoryStorage::new());
    let llm = Arc::new(
        LlmClient::new("test-key".to_owned(), server.uri())
            .unwrap()
            .with_model("test-model".to_owned()),
    );
    ChatService::new(storage, llm)
}

/// The reply call carries max_tokens 1000, the follow-up call 200; matching
/// on that keeps the two mocks disjoint.
async fn mount_reply(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(serde_json::json!({"max_tokens": 1000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

async fn mount_follow_ups(server: &MockServer, suggestions: &[&str]) {
    let content = serde_json::json!({ "suggestions": suggestions }).to_string();
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(serde_json::json!({"max_tokens": 200})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&content)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_generate_response_returns_reply_sources_and_follow_ups() {
    let server = MockServer::start().await;
    mount_reply(&server, "Use VEXcode blocks to start.").await;
    mount_follow_ups(&server, &["What about Python?", "Where are tutorials?"]).await;

    let service = test_service(&server);
    let reply = service
        .generate_response("s1", "How do I program my robot with VEXcode?")
        .await
        .unwrap();

    assert_eq!(reply.response, "Use VEXcode blocks to start.");
    assert!(reply.sources.contains(&"https://www.vexrobotics.com/vexcode".to_owned()));
    assert!(reply.sources.contains(&"https://cs.vex.com".to_owned()));
    assert_eq!(reply.suggested_follow_ups.len(), 2);
}

#[tokio::test]
async fn test_push_back_rules_sources() {
    let server = MockServer::start().await;
    mount_reply(&server, "See the Push Back manual.").await;
    mount_follow_ups(&server, &[]).await;

    let service = test_service(&server);
    let reply = service
        .generate_response("s1", "What do the rules say about push back parking?")
        .await
        .unwrap();

    assert!(reply.sources.iter().any(|s| s.contains("PushBack-GameManual")));
    assert!(!reply.sources.iter().any(|s| s.contains("mix-and-match")));
}

#[tokio::test]
async fn test_follow_up_failure_degrades_to_empty_list() {
    let server = MockServer::start().await;
    mount_reply(&server, "a reply").await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(serde_json::json!({"max_tokens": 200})))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = test_service(&server);
    let reply = service.generate_response("s1", "hello").await.unwrap();

    assert_eq!(reply.response, "a reply");
    assert!(reply.suggested_follow_ups.is_empty());
}

#[tokio::test]
async fn test_reply_failure_is_terminal_and_leaves_no_window_trace() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let service = test_service(&server);
    let err = service.generate_response("s1", "hello").await.unwrap_err();

    assert!(matches!(err, ServiceError::Llm(_)));
    assert!(service.history("s1").await.is_empty());
}

#[tokio::test]
async fn test_window_never_exceeds_cap() {
    let server = MockServer::start().await;
    mount_reply(&server, "ok").await;
    mount_follow_ups(&server, &[]).await;

    let service = test_service(&server);
    for i in 0..15 {
        service.generate_response("s1", &format!("question {i}")).await.unwrap();
    }

    assert_eq!(service.history("s1").await.len(), HISTORY_WINDOW);

    // Every request sent upstream stayed within the cap (system + window).
    for request in server.received_requests().await.unwrap() {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        let messages = body["messages"].as_array().unwrap();
        assert!(messages.len() <= HISTORY_WINDOW + 1);
    }
}

#[tokio::test]
async fn test_window_drops_oldest_first() {
    let server = MockServer::start().await;
    mount_reply(&server, "ok").await;
    mount_follow_ups(&server, &[]).await;

    let service = test_service(&server);
    for i in 0..12 {
        service.generate_response("s1", &format!("question {i}")).await.unwrap();
    }

    let window = service.history("s1").await;
    assert_eq!(window.len(), HISTORY_WINDOW);
    // 12 exchanges = 24 turns; the first two exchanges fell off.
    assert_eq!(window[0].content, "question 2");
}

#[tokio::test]
async fn test_sessions_have_independent_windows() {
    let server = MockServer::start().await;
    mount_reply(&server, "ok").await;
    mount_follow_ups(&server, &[]).await;

    let service = test_service(&server);
    service.generate_response("s1", "first session").await.unwrap();
    service.generate_response("s2", "second session").await.unwrap();

    assert_eq!(service.history("s1").await.len(), 2);
    assert_eq!(service.history("s2").await.len(), 2);
    assert_eq!(service.history("s1").await[0].content, "first session");
}

#[tokio::test]
async fn test_post_message_stores_both_turns_with_metadata() {
    let server = MockServer::start().await;
    mount_reply(&server, "the reply").await;
    mount_follow_ups(&server, &["follow up?"]).await;

    let service = test_service(&server);
    let exchange =
        service.post_message("s1", "Tell me about tournament registration", MessageRole::User).await.unwrap();

    assert_eq!(exchange.user_message.role, MessageRole::User);
    assert_eq!(exchange.assistant_message.role, MessageRole::Assistant);
    assert_eq!(exchange.assistant_message.content, "the reply");

    let metadata = exchange.assistant_message.metadata.as_ref().unwrap();
    assert_eq!(metadata.sources, vec!["https://www.robotevents.com".to_owned()]);
    assert_eq!(metadata.suggested_follow_ups, vec!["follow up?".to_owned()]);

    let stored = service.list_messages("s1").await.unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].role, MessageRole::User);
    assert_eq!(stored[1].role, MessageRole::Assistant);
}

#[tokio::test]
async fn test_post_message_failure_keeps_user_message_in_log() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let service = test_service(&server);
    let err = service.post_message("s1", "hello", MessageRole::User).await.unwrap_err();
    assert!(matches!(err, ServiceError::Llm(_)));

    let stored = service.list_messages("s1").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].role, MessageRole::User);
}

#[tokio::test]
async fn test_clear_messages_drops_log_and_window() {
    let server = MockServer::start().await;
    mount_reply(&server, "ok").await;
    mount_follow_ups(&server, &[]).await;

    let service = test_service(&server);
    service.post_message("s1", "hello", MessageRole::User).await.unwrap();
    service.post_message("s2", "untouched", MessageRole::User).await.unwrap();

    let removed = service.clear_messages("s1").await.unwrap();
    assert_eq!(removed, 2);
    assert!(service.list_messages("s1").await.unwrap().is_empty());
    assert!(service.history("s1").await.is_empty());

    // Other sessions keep their state.
    assert_eq!(service.list_messages("s2").await.unwrap().len(), 2);
    assert_eq!(service.history("s2").await.len(), 2);
}

#[tokio::test]
async fn test_clear_history_is_idempotent() {
    let server = MockServer::start().await;
    let service = test_service(&server);
    service.clear_history("never-seen").await;
    service.clear_history("never-seen").await;
    assert!(service.history("never-seen").await.is_empty());
}
