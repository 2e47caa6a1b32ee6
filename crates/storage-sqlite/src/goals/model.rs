//! Database models for goals.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use finwise_core::goals::{GoalCategory, GoalPriority, NewGoal, SavingsGoal};
use finwise_core::utils::time_utils::format_datetime;

use crate::utils::{now_stored, parse_stored_datetime};

/// Database model for goals
#[derive(
    Insertable,
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<String>,
    pub category: String,
    pub priority: String,
    pub is_completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl GoalDB {
    /// Builds a fresh row from the creation input. Progress starts at zero
    /// and the completion flag unset.
    pub fn from_new(owner_id: &str, new_goal: NewGoal) -> Self {
        let now = now_stored();
        GoalDB {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: 0.0,
            deadline: new_goal.deadline.map(format_datetime),
            category: new_goal.category.unwrap_or_default().as_str().to_string(),
            priority: new_goal.priority.unwrap_or_default().as_str().to_string(),
            is_completed: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

// Conversion to domain model
impl From<GoalDB> for SavingsGoal {
    fn from(db: GoalDB) -> Self {
        Self {
            created_at: parse_stored_datetime(&db.created_at, "created_at"),
            updated_at: parse_stored_datetime(&db.updated_at, "updated_at"),
            deadline: db
                .deadline
                .as_deref()
                .map(|value| parse_stored_datetime(value, "deadline")),
            category: GoalCategory::parse(&db.category).unwrap_or_else(|| {
                log::error!("Unknown goal category '{}', using default", db.category);
                GoalCategory::default()
            }),
            priority: GoalPriority::parse(&db.priority).unwrap_or_else(|| {
                log::error!("Unknown goal priority '{}', using default", db.priority);
                GoalPriority::default()
            }),
            id: db.id,
            owner_id: db.owner_id,
            name: db.name,
            target_amount: db.target_amount,
            current_amount: db.current_amount,
            is_completed: db.is_completed,
        }
    }
}
