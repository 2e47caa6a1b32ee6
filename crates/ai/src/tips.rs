//! Generated money-saving tips.

use std::sync::Arc;

use log::debug;

use finwise_core::assistant::{AiTip, AssistantRepositoryTrait, TipCategory};
use finwise_core::budgets::{BudgetAlertLevel, BudgetServiceTrait};
use finwise_core::constants::AI_TIPS_LIMIT;
use finwise_core::goals::GoalServiceTrait;

use crate::error::AiError;
use crate::providers::CompletionProviderTrait;

pub struct TipService {
    repository: Arc<dyn AssistantRepositoryTrait>,
    provider: Arc<dyn CompletionProviderTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
}

impl TipService {
    pub fn new(
        repository: Arc<dyn AssistantRepositoryTrait>,
        provider: Arc<dyn CompletionProviderTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
    ) -> Self {
        TipService {
            repository,
            provider,
            budget_service,
            goal_service,
        }
    }

    pub fn list(&self, owner_id: &str) -> Result<Vec<AiTip>, AiError> {
        Ok(self.repository.recent_tips(owner_id, AI_TIPS_LIMIT)?)
    }

    /// Generates one tip from the owner's current standing and persists it.
    pub async fn generate(&self, owner_id: &str) -> Result<AiTip, AiError> {
        let summary = self.budget_service.summarize(owner_id)?;
        let stats = self.goal_service.goal_stats(owner_id)?;

        let overrun = summary
            .categories
            .iter()
            .any(|c| c.alert_level == BudgetAlertLevel::Critical);
        let (category, relevance_score) = if overrun {
            (TipCategory::Spending, 0.9)
        } else if summary.total_budget > 0.0 && summary.percent_used > 75.0 {
            (TipCategory::Budgeting, 0.8)
        } else if stats.ongoing > 0 {
            (TipCategory::Savings, 0.7)
        } else {
            (TipCategory::Budgeting, 0.6)
        };

        let prompt = format!(
            "Give one short, actionable personal-finance tip about {}.\n\
             The user has {:.0}% of their total budget spent and {} ongoing \
             savings goals ({:.2} saved of {:.2} targeted).",
            category.as_str(),
            summary.percent_used,
            stats.ongoing,
            stats.total_saved_amount,
            stats.total_target_amount,
        );
        debug!("Generating {} tip for owner {}", category.as_str(), owner_id);
        let content = self.provider.complete(&prompt).await?;

        Ok(self
            .repository
            .insert_tip(owner_id, &content, category, relevance_score)
            .await?)
    }
}
