use vexchat_core::{FALLBACK_REPLY, REPLY_MAX_TOKENS, REPLY_TEMPERATURE, Turn};

use crate::ai_types::{ChatRequest, Message};
use crate::client::LlmClient;
use crate::error::LlmError;

impl LlmClient {
    /// Generate the assistant reply for a conversation.
    ///
    /// Sends the knowledge-base system instruction followed by the retained
    /// history. Blank model output degrades to a fixed apology string; an
    /// API failure is a terminal error for the turn.
    ///
    /// # Errors
    /// Returns the underlying [`LlmError`] when the completion call fails.
    pub async fn generate_reply(
        &self,
        system_prompt: &str,
        history: &[Turn],
    ) -> Result<String, LlmError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(Message { role: "system".to_owned(), content: system_prompt.to_owned() });
        messages.extend(history.iter().map(|turn| Message {
            role: turn.role.as_str().to_owned(),
            content: turn.content.clone(),
        }));

        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: REPLY_MAX_TOKENS,
            temperature: Some(REPLY_TEMPERATURE),
            response_format: None,
        };

        let content = self.chat_completion(&request).await?;
        if content.trim().is_empty() {
            return Ok(FALLBACK_REPLY.to_owned());
        }
        Ok(content)
    }
}
