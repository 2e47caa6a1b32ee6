//! Database models for transactions.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use finwise_core::transactions::{
    NewTransaction, RecurringFrequency, Transaction, TransactionCategory,
};
use finwise_core::utils::time_utils::format_datetime;

use crate::utils::{now_stored, parse_stored_datetime};

/// Database model for transactions
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
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub owner_id: String,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub is_income: bool,
    pub is_recurring: bool,
    pub recurring_frequency: Option<String>,
    pub transaction_date: String,
    pub created_at: String,
}

impl TransactionDB {
    pub fn from_new(owner_id: &str, new_transaction: NewTransaction) -> Self {
        TransactionDB {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            amount: new_transaction.amount,
            description: new_transaction.description,
            category: new_transaction.category.as_str().to_string(),
            is_income: new_transaction.is_income,
            is_recurring: new_transaction.is_recurring,
            recurring_frequency: new_transaction
                .recurring_frequency
                .map(|f| f.as_str().to_string()),
            transaction_date: format_datetime(new_transaction.date),
            created_at: now_stored(),
        }
    }
}

// Conversion to domain model
impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            date: parse_stored_datetime(&db.transaction_date, "transaction_date"),
            created_at: parse_stored_datetime(&db.created_at, "created_at"),
            category: TransactionCategory::parse(&db.category).unwrap_or_else(|| {
                log::error!(
                    "Unknown transaction category '{}', using default",
                    db.category
                );
                TransactionCategory::default()
            }),
            recurring_frequency: db
                .recurring_frequency
                .as_deref()
                .and_then(RecurringFrequency::parse),
            id: db.id,
            owner_id: db.owner_id,
            amount: db.amount,
            description: db.description,
            is_income: db.is_income,
            is_recurring: db.is_recurring,
        }
    }
}
