//! Request/query types (Deserialize)

use serde::Deserialize;

/// Body for `POST /api/chat/session`.
///
/// `session_id` is an `Option` so a missing or blank id maps to a 400 in the
/// handler rather than an extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body for `POST /api/chat/message`. `role` defaults to `user`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Query for `GET /api/vex/resources`.
#[derive(Debug, Deserialize)]
pub struct ResourcesQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Query for `GET /api/vex/info/{topic}`.
#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    #[serde(rename = "type")]
    pub info_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_session_camel_case() {
        let req: CreateSessionRequest =
            serde_json::from_value(json!({"sessionId": "s1"})).unwrap();
        assert_eq!(req.session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_create_session_missing_id_deserializes() {
        let req: CreateSessionRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.session_id.is_none());
    }

    #[test]
    fn test_post_message_defaults() {
        let req: PostMessageRequest =
            serde_json::from_value(json!({"sessionId": "s1", "content": "hi"})).unwrap();
        assert_eq!(req.session_id.as_deref(), Some("s1"));
        assert_eq!(req.content.as_deref(), Some("hi"));
        assert!(req.role.is_none());
    }

    #[test]
    fn test_info_query_type_rename() {
        let q: InfoQuery = serde_json::from_value(json!({"type": "programming"})).unwrap();
        assert_eq!(q.info_type.as_deref(), Some("programming"));
    }
}
