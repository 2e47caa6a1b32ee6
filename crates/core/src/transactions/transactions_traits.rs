use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction};
use async_trait::async_trait;

/// Trait for transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Loads a transaction by id regardless of owner. `NotFound` when absent.
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    /// Loads an owner's transactions, newest first by attributed date.
    fn list_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>>;

    async fn insert_transaction(
        &self,
        owner_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;

    /// Deletes the transaction scoped to `(transaction_id, owner_id)`,
    /// returning the number of rows removed.
    async fn delete_transaction(&self, transaction_id: &str, owner_id: &str) -> Result<usize>;
}

/// Trait for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn list_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>>;

    /// Records a transaction; non-income entries feed the budget aggregator.
    async fn create_transaction(
        &self,
        owner_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;

    /// Ownership-checked delete; non-income entries release their accrued
    /// spend from the matching budget.
    async fn delete_transaction(&self, transaction_id: &str, requester_id: &str) -> Result<()>;
}
