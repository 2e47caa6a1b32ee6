//! Database models for budgets.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use finwise_core::budgets::{Budget, BudgetPeriod, NewBudget};
use finwise_core::transactions::TransactionCategory;

use crate::utils::{now_stored, parse_stored_datetime};

/// Database model for budgets. `limit_amount` carries the spending limit
/// (`limit` is reserved in SQL).
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
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: String,
    pub owner_id: String,
    pub category: String,
    pub limit_amount: f64,
    pub period: String,
    pub current_spent: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl BudgetDB {
    pub fn from_new(owner_id: &str, new_budget: NewBudget) -> Self {
        let now = now_stored();
        BudgetDB {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            category: new_budget.category.as_str().to_string(),
            limit_amount: new_budget.amount,
            period: new_budget.period.as_str().to_string(),
            current_spent: 0.0,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Row for a budget lazily created by the aggregator: no limit yet, the
    /// first spend already accrued.
    pub fn accrual_placeholder(owner_id: &str, category: TransactionCategory, amount: f64) -> Self {
        let now = now_stored();
        BudgetDB {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            category: category.as_str().to_string(),
            limit_amount: 0.0,
            period: BudgetPeriod::Monthly.as_str().to_string(),
            current_spent: amount,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

// Conversion to domain model
impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            created_at: parse_stored_datetime(&db.created_at, "created_at"),
            updated_at: parse_stored_datetime(&db.updated_at, "updated_at"),
            category: TransactionCategory::parse(&db.category).unwrap_or_else(|| {
                log::error!("Unknown budget category '{}', using default", db.category);
                TransactionCategory::default()
            }),
            period: BudgetPeriod::parse(&db.period).unwrap_or_else(|| {
                log::error!("Unknown budget period '{}', using default", db.period);
                BudgetPeriod::default()
            }),
            id: db.id,
            owner_id: db.owner_id,
            limit: db.limit_amount,
            current_spent: db.current_spent,
        }
    }
}
