//! Assistant chat service.
//!
//! A round-trip stores the user message, asks the completion provider for a
//! reply carrying a compact financial snapshot, stores the reply, and returns
//! both. History reads are capped and newest first.

use std::sync::Arc;

use log::debug;

use finwise_core::assistant::{
    AssistantRepositoryTrait, ChatExchange, ChatMessage, MessageSender,
};
use finwise_core::budgets::BudgetServiceTrait;
use finwise_core::constants::CHAT_HISTORY_LIMIT;
use finwise_core::goals::GoalServiceTrait;

use crate::error::AiError;
use crate::providers::CompletionProviderTrait;

pub struct ChatService {
    repository: Arc<dyn AssistantRepositoryTrait>,
    provider: Arc<dyn CompletionProviderTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
}

impl ChatService {
    pub fn new(
        repository: Arc<dyn AssistantRepositoryTrait>,
        provider: Arc<dyn CompletionProviderTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
    ) -> Self {
        ChatService {
            repository,
            provider,
            budget_service,
            goal_service,
        }
    }

    /// Compact owner snapshot prepended to every prompt. Failures here must
    /// not break the conversation, so it degrades to an empty string.
    fn financial_context(&self, owner_id: &str) -> String {
        let mut context = String::new();
        if let Ok(summary) = self.budget_service.summarize(owner_id) {
            context.push_str(&format!(
                "Budgets: {:.2} of {:.2} spent ({:.0}% used). ",
                summary.total_spent, summary.total_budget, summary.percent_used
            ));
        }
        if let Ok(stats) = self.goal_service.goal_stats(owner_id) {
            context.push_str(&format!(
                "Goals: {} total, {} completed, {:.2} saved towards {:.2}.",
                stats.total, stats.completed, stats.total_saved_amount, stats.total_target_amount
            ));
        }
        context
    }

    pub async fn send_message(
        &self,
        owner_id: &str,
        content: &str,
    ) -> Result<ChatExchange, AiError> {
        if content.trim().is_empty() {
            return Err(AiError::invalid_input("message must not be empty"));
        }

        let user_message = self
            .repository
            .insert_message(owner_id, content, MessageSender::User)
            .await?;

        let prompt = format!(
            "You are a personal finance assistant. Answer briefly and concretely.\n\
             User context: {}\n\
             User message: {}",
            self.financial_context(owner_id),
            content
        );
        debug!("Requesting completion for owner {}", owner_id);
        let reply = self.provider.complete(&prompt).await?;

        let ai_response = self
            .repository
            .insert_message(owner_id, &reply, MessageSender::Assistant)
            .await?;

        Ok(ChatExchange {
            user_message,
            ai_response,
        })
    }

    pub fn history(&self, owner_id: &str) -> Result<Vec<ChatMessage>, AiError> {
        Ok(self
            .repository
            .recent_messages(owner_id, CHAT_HISTORY_LIMIT)?)
    }
}
