//! Budgets domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{BUDGET_CRITICAL_THRESHOLD, BUDGET_WARNING_THRESHOLD};
use crate::transactions::TransactionCategory;

/// Domain model for a per-category spending budget.
///
/// One active budget per category per owner holds by convention; the storage
/// layer does not enforce uniqueness, and the aggregator resolves duplicates
/// to the oldest record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub owner_id: String,
    pub category: TransactionCategory,
    pub limit: f64,
    pub period: BudgetPeriod,
    pub current_spent: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a budget. `amount` is the spending limit.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: TransactionCategory,
    pub amount: f64,
    #[serde(default)]
    pub period: BudgetPeriod,
}

/// Recurring interval a budget's limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Daily => "daily",
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(BudgetPeriod::Daily),
            "weekly" => Some(BudgetPeriod::Weekly),
            "monthly" => Some(BudgetPeriod::Monthly),
            "yearly" => Some(BudgetPeriod::Yearly),
            _ => None,
        }
    }
}

/// Advisory classification of budget usage, consumed by display layers.
/// Spending is never rejected for exceeding a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetAlertLevel {
    Critical,
    Warning,
    Nominal,
}

impl BudgetAlertLevel {
    pub fn classify(percent_used: f64) -> Self {
        if percent_used > BUDGET_CRITICAL_THRESHOLD {
            BudgetAlertLevel::Critical
        } else if percent_used > BUDGET_WARNING_THRESHOLD {
            BudgetAlertLevel::Warning
        } else {
            BudgetAlertLevel::Nominal
        }
    }
}

/// Aggregate spend-vs-limit view over an owner's budgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
    pub categories: Vec<CategoryBudgetSummary>,
}

/// Per-category breakdown entry of a [`BudgetSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudgetSummary {
    pub category: TransactionCategory,
    pub limit: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
    pub alert_level: BudgetAlertLevel,
}
