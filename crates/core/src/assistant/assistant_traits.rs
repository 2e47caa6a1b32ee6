use crate::assistant::assistant_model::{AiTip, ChatMessage, MessageSender, TipCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for assistant persistence: chat messages and tips.
#[async_trait]
pub trait AssistantRepositoryTrait: Send + Sync {
    /// Loads an owner's latest messages, newest first, capped at `limit`.
    fn recent_messages(&self, owner_id: &str, limit: i64) -> Result<Vec<ChatMessage>>;

    async fn insert_message(
        &self,
        owner_id: &str,
        content: &str,
        sender: MessageSender,
    ) -> Result<ChatMessage>;

    /// Loads an owner's latest tips, newest first, capped at `limit`.
    fn recent_tips(&self, owner_id: &str, limit: i64) -> Result<Vec<AiTip>>;

    async fn insert_tip(
        &self,
        owner_id: &str,
        content: &str,
        category: TipCategory,
        relevance_score: f64,
    ) -> Result<AiTip>;
}
