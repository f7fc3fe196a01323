use vexchat_core::{FOLLOW_UP_MAX_TOKENS, strip_markdown_json};

use crate::ai_types::{ChatRequest, FollowUpsJson, Message, ResponseFormat};
use crate::client::LlmClient;
use crate::error::LlmError;

impl LlmClient {
    /// Ask the model for 2-3 follow-up questions a student might ask next.
    ///
    /// Callers treat this as best-effort: any error here degrades to an
    /// empty list at the service boundary.
    ///
    /// # Errors
    /// Returns an error if the completion call fails or the structured
    /// response cannot be parsed.
    pub async fn suggest_follow_ups(
        &self,
        user_message: &str,
        assistant_response: &str,
    ) -> Result<Vec<String>, LlmError> {
        let prompt = format!(
            r#"Based on this VEX robotics conversation, suggest 2-3 relevant follow-up questions a student might ask:

User: {user_message}
Assistant: {assistant_response}

Respond with JSON: {{"suggestions": ["..."]}}"#
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message { role: "user".to_owned(), content: prompt }],
            max_tokens: FOLLOW_UP_MAX_TOKENS,
            temperature: None,
            response_format: Some(ResponseFormat::json_object()),
        };

        let body = self.chat_completion(&request).await?;
        let content = strip_markdown_json(&body);
        let parsed: FollowUpsJson =
            serde_json::from_str(content).map_err(|e| LlmError::JsonParse {
                context: format!(
                    "follow-up suggestions (content: {})",
                    crate::client::truncate(content, 200)
                ),
                source: e,
            })?;
        Ok(parsed.suggestions)
    }
}
