use std::sync::Arc;

use log::debug;

use super::goals_model::{GoalCategory, GoalStats, GoalStatusFilter, NewGoal, SavingsGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result};
use crate::validation::{ensure_non_empty, ensure_positive_amount};
use async_trait::async_trait;

/// Service owning savings-goal progress and completion-state transitions.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { repository }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn list_goals(
        &self,
        owner_id: &str,
        status: Option<GoalStatusFilter>,
        category: Option<GoalCategory>,
    ) -> Result<Vec<SavingsGoal>> {
        self.repository.list_goals(owner_id, status, category)
    }

    fn goal_stats(&self, owner_id: &str) -> Result<GoalStats> {
        let goals = self.repository.list_goals(owner_id, None, None)?;
        let mut stats = GoalStats::default();
        for goal in &goals {
            stats.total += 1;
            stats.total_target_amount += goal.target_amount;
            stats.total_saved_amount += goal.current_amount;
            if goal.is_completed {
                stats.completed += 1;
            } else {
                stats.ongoing += 1;
            }
            *stats
                .category_count
                .entry(goal.category.as_str().to_string())
                .or_insert(0) += 1;
        }
        Ok(stats)
    }

    async fn create_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<SavingsGoal> {
        ensure_non_empty("name", &new_goal.name)?;
        ensure_positive_amount("targetAmount", new_goal.target_amount)?;
        debug!("Creating goal '{}' for owner {}", new_goal.name, owner_id);
        self.repository.insert_goal(owner_id, new_goal).await
    }

    async fn contribute(
        &self,
        goal_id: &str,
        requester_id: &str,
        amount: f64,
    ) -> Result<SavingsGoal> {
        ensure_positive_amount("amount", amount)?;

        // Existence is checked before ownership so an absent goal reports
        // NotFound rather than Forbidden.
        let goal = self.repository.get_goal(goal_id)?;
        if goal.owner_id != requester_id {
            return Err(Error::Forbidden("goal belongs to another user".to_string()));
        }

        self.repository
            .add_contribution(goal_id, requester_id, amount)
            .await
    }

    async fn delete_goal(&self, goal_id: &str, requester_id: &str) -> Result<()> {
        let goal = self.repository.get_goal(goal_id)?;
        if goal.owner_id != requester_id {
            return Err(Error::Forbidden("goal belongs to another user".to_string()));
        }
        let removed = self.repository.delete_goal(goal_id, requester_id).await?;
        if removed == 0 {
            // Raced with another delete.
            return Err(crate::errors::DatabaseError::NotFound(goal_id.to_string()).into());
        }
        Ok(())
    }
}
