use async_trait::async_trait;

use crate::api::{ApiError, ChatReply, ChatRequest, ChatSession, SessionMessages};
use crate::i18n::Language;

/// The remote operations the chat manager depends on.
///
/// Implemented by [`crate::api::ApiClient`]; tests substitute an in-memory
/// backend.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;

    async fn translate_text(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ApiError>;

    async fn chat_history(&self) -> Result<Vec<ChatSession>, ApiError>;

    async fn session_messages(&self, session_id: i64) -> Result<SessionMessages, ApiError>;

    async fn delete_session(&self, session_id: i64) -> Result<(), ApiError>;
}
