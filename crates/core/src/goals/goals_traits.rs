use crate::errors::Result;
use crate::goals::goals_model::{GoalCategory, GoalStatusFilter, NewGoal, SavingsGoal};
use async_trait::async_trait;

/// Trait for goal repository operations.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Loads a goal by id regardless of owner. `NotFound` when absent.
    fn get_goal(&self, goal_id: &str) -> Result<SavingsGoal>;

    /// Loads an owner's goals, optionally filtered, newest first.
    fn list_goals(
        &self,
        owner_id: &str,
        status: Option<GoalStatusFilter>,
        category: Option<GoalCategory>,
    ) -> Result<Vec<SavingsGoal>>;

    async fn insert_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<SavingsGoal>;

    /// Atomically adds `amount` to the goal's progress and re-derives the
    /// completion flag. Scoped to `(goal_id, owner_id)`; `NotFound` when no
    /// row matches.
    async fn add_contribution(
        &self,
        goal_id: &str,
        owner_id: &str,
        amount: f64,
    ) -> Result<SavingsGoal>;

    /// Deletes the goal scoped to `(goal_id, owner_id)`, returning the number
    /// of rows removed.
    async fn delete_goal(&self, goal_id: &str, owner_id: &str) -> Result<usize>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn list_goals(
        &self,
        owner_id: &str,
        status: Option<GoalStatusFilter>,
        category: Option<GoalCategory>,
    ) -> Result<Vec<SavingsGoal>>;

    fn goal_stats(&self, owner_id: &str) -> Result<crate::goals::GoalStats>;

    async fn create_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<SavingsGoal>;

    /// Adds a contribution on behalf of `requester_id`. Fails `NotFound` for
    /// an absent goal and `Forbidden` for a non-owner, in that order.
    async fn contribute(
        &self,
        goal_id: &str,
        requester_id: &str,
        amount: f64,
    ) -> Result<SavingsGoal>;

    async fn delete_goal(&self, goal_id: &str, requester_id: &str) -> Result<()>;
}
