//! Transactions domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a single income or expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub owner_id: String,
    pub amount: f64,
    pub description: String,
    pub category: TransactionCategory,
    pub is_income: bool,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<RecurringFrequency>,
    /// Point in time the transaction is attributed to, not when it was logged.
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording a new transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
    pub category: TransactionCategory,
    pub is_income: bool,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_frequency: Option<RecurringFrequency>,
    pub date: DateTime<Utc>,
}

/// Spending category shared by transactions and budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    Food,
    Housing,
    Transportation,
    Utilities,
    Healthcare,
    Entertainment,
    Shopping,
    Education,
    Personal,
    Income,
    Savings,
    #[default]
    Other,
}

impl TransactionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionCategory::Food => "food",
            TransactionCategory::Housing => "housing",
            TransactionCategory::Transportation => "transportation",
            TransactionCategory::Utilities => "utilities",
            TransactionCategory::Healthcare => "healthcare",
            TransactionCategory::Entertainment => "entertainment",
            TransactionCategory::Shopping => "shopping",
            TransactionCategory::Education => "education",
            TransactionCategory::Personal => "personal",
            TransactionCategory::Income => "income",
            TransactionCategory::Savings => "savings",
            TransactionCategory::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "food" => Some(TransactionCategory::Food),
            "housing" => Some(TransactionCategory::Housing),
            "transportation" => Some(TransactionCategory::Transportation),
            "utilities" => Some(TransactionCategory::Utilities),
            "healthcare" => Some(TransactionCategory::Healthcare),
            "entertainment" => Some(TransactionCategory::Entertainment),
            "shopping" => Some(TransactionCategory::Shopping),
            "education" => Some(TransactionCategory::Education),
            "personal" => Some(TransactionCategory::Personal),
            "income" => Some(TransactionCategory::Income),
            "savings" => Some(TransactionCategory::Savings),
            "other" => Some(TransactionCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interval a recurring transaction repeats on. Informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurringFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringFrequency::Daily => "daily",
            RecurringFrequency::Weekly => "weekly",
            RecurringFrequency::Monthly => "monthly",
            RecurringFrequency::Yearly => "yearly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(RecurringFrequency::Daily),
            "weekly" => Some(RecurringFrequency::Weekly),
            "monthly" => Some(RecurringFrequency::Monthly),
            "yearly" => Some(RecurringFrequency::Yearly),
            _ => None,
        }
    }
}
