//! Goals domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Domain model representing a savings goal.
///
/// `current_amount` only ever grows through contributions; overshooting
/// `target_amount` is allowed. `is_completed` is derived from the two amounts
/// and never reverts once reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<DateTime<Utc>>,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<GoalCategory>,
    #[serde(default)]
    pub priority: Option<GoalPriority>,
}

/// Informational tag for a goal. No behavior is keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Emergency,
    Retirement,
    LargePurchase,
    Vacation,
    Education,
    #[default]
    Other,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Emergency => "emergency",
            GoalCategory::Retirement => "retirement",
            GoalCategory::LargePurchase => "large_purchase",
            GoalCategory::Vacation => "vacation",
            GoalCategory::Education => "education",
            GoalCategory::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "emergency" => Some(GoalCategory::Emergency),
            "retirement" => Some(GoalCategory::Retirement),
            "large_purchase" => Some(GoalCategory::LargePurchase),
            "vacation" => Some(GoalCategory::Vacation),
            "education" => Some(GoalCategory::Education),
            "other" => Some(GoalCategory::Other),
            _ => None,
        }
    }
}

/// Informational priority tag for a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl GoalPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPriority::Low => "low",
            GoalPriority::Medium => "medium",
            GoalPriority::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(GoalPriority::Low),
            "medium" => Some(GoalPriority::Medium),
            "high" => Some(GoalPriority::High),
            _ => None,
        }
    }
}

/// Listing filter on completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatusFilter {
    Completed,
    Ongoing,
}

/// Aggregate view over an owner's goals.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub total: u32,
    pub completed: u32,
    pub ongoing: u32,
    pub total_target_amount: f64,
    pub total_saved_amount: f64,
    pub category_count: HashMap<String, u32>,
}
