use crate::budgets::budgets_model::{Budget, BudgetSummary, NewBudget};
use crate::errors::Result;
use crate::transactions::TransactionCategory;
use async_trait::async_trait;

/// Trait for budget repository operations.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Loads an owner's budgets, newest first.
    fn list_budgets(&self, owner_id: &str) -> Result<Vec<Budget>>;

    async fn insert_budget(&self, owner_id: &str, new_budget: NewBudget) -> Result<Budget>;

    /// Atomically adds `amount` to the spend accumulator of the owner's
    /// budget for `category`, lazily creating the budget when none exists.
    async fn record_spend(
        &self,
        owner_id: &str,
        category: TransactionCategory,
        amount: f64,
    ) -> Result<Budget>;

    /// Atomically subtracts `amount` from the spend accumulator, floored at
    /// zero. Returns `None` when the owner has no budget for the category.
    async fn release_spend(
        &self,
        owner_id: &str,
        category: TransactionCategory,
        amount: f64,
    ) -> Result<Option<Budget>>;
}

/// Trait for budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn list_budgets(&self, owner_id: &str) -> Result<Vec<Budget>>;

    fn summarize(&self, owner_id: &str) -> Result<BudgetSummary>;

    async fn create_budget(&self, owner_id: &str, new_budget: NewBudget) -> Result<Budget>;

    async fn record_spend(
        &self,
        owner_id: &str,
        category: TransactionCategory,
        amount: f64,
    ) -> Result<()>;

    async fn release_spend(
        &self,
        owner_id: &str,
        category: TransactionCategory,
        amount: f64,
    ) -> Result<()>;
}
