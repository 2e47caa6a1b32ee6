use std::sync::Arc;

use log::debug;

use super::budgets_model::{
    Budget, BudgetAlertLevel, BudgetSummary, CategoryBudgetSummary, NewBudget,
};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;
use crate::transactions::TransactionCategory;
use crate::validation::ensure_positive_amount;
use async_trait::async_trait;

/// Service owning per-category spend totals versus limits.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { repository }
    }

    fn percent_used(spent: f64, limit: f64) -> f64 {
        if limit == 0.0 {
            0.0
        } else {
            spent / limit * 100.0
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn list_budgets(&self, owner_id: &str) -> Result<Vec<Budget>> {
        self.repository.list_budgets(owner_id)
    }

    fn summarize(&self, owner_id: &str) -> Result<BudgetSummary> {
        let budgets = self.repository.list_budgets(owner_id)?;

        let total_budget: f64 = budgets.iter().map(|b| b.limit).sum();
        let total_spent: f64 = budgets.iter().map(|b| b.current_spent).sum();

        let categories = budgets
            .iter()
            .map(|budget| {
                let percent_used = Self::percent_used(budget.current_spent, budget.limit);
                CategoryBudgetSummary {
                    category: budget.category,
                    limit: budget.limit,
                    spent: budget.current_spent,
                    remaining: budget.limit - budget.current_spent,
                    percent_used,
                    alert_level: BudgetAlertLevel::classify(percent_used),
                }
            })
            .collect();

        Ok(BudgetSummary {
            total_budget,
            total_spent,
            remaining: total_budget - total_spent,
            percent_used: Self::percent_used(total_spent, total_budget),
            categories,
        })
    }

    async fn create_budget(&self, owner_id: &str, new_budget: NewBudget) -> Result<Budget> {
        ensure_positive_amount("amount", new_budget.amount)?;
        debug!(
            "Creating {} budget for owner {}",
            new_budget.category, owner_id
        );
        self.repository.insert_budget(owner_id, new_budget).await
    }

    async fn record_spend(
        &self,
        owner_id: &str,
        category: TransactionCategory,
        amount: f64,
    ) -> Result<()> {
        ensure_positive_amount("amount", amount)?;
        self.repository
            .record_spend(owner_id, category, amount)
            .await?;
        Ok(())
    }

    async fn release_spend(
        &self,
        owner_id: &str,
        category: TransactionCategory,
        amount: f64,
    ) -> Result<()> {
        ensure_positive_amount("amount", amount)?;
        self.repository
            .release_spend(owner_id, category, amount)
            .await?;
        Ok(())
    }
}
