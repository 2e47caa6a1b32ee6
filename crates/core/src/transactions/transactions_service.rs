use std::sync::Arc;

use log::{debug, warn};

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::budgets::BudgetServiceTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::validation::{ensure_non_empty, ensure_positive_amount};
use async_trait::async_trait;

/// Service owning the transaction log. Non-income entries flow into the
/// budget aggregator's spend accumulator on create and out of it on delete.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
}

impl TransactionService {
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
    ) -> Self {
        TransactionService {
            repository,
            budget_service,
        }
    }

    fn validate(new_transaction: &NewTransaction) -> Result<()> {
        ensure_positive_amount("amount", new_transaction.amount)?;
        ensure_non_empty("description", &new_transaction.description)?;
        if new_transaction.is_recurring && new_transaction.recurring_frequency.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "recurringFrequency".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn list_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        self.repository.list_transactions(owner_id)
    }

    async fn create_transaction(
        &self,
        owner_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        Self::validate(&new_transaction)?;
        debug!(
            "Recording {} transaction of {} for owner {}",
            new_transaction.category, new_transaction.amount, owner_id
        );

        let created = self
            .repository
            .insert_transaction(owner_id, new_transaction)
            .await?;

        // Income never affects budget accumulators.
        if !created.is_income {
            self.budget_service
                .record_spend(owner_id, created.category, created.amount)
                .await?;
        }
        Ok(created)
    }

    async fn delete_transaction(&self, transaction_id: &str, requester_id: &str) -> Result<()> {
        let transaction = self.repository.get_transaction(transaction_id)?;
        if transaction.owner_id != requester_id {
            return Err(Error::Forbidden(
                "transaction belongs to another user".to_string(),
            ));
        }
        let removed = self
            .repository
            .delete_transaction(transaction_id, requester_id)
            .await?;
        if removed == 0 {
            // Raced with another delete.
            return Err(
                crate::errors::DatabaseError::NotFound(transaction_id.to_string()).into(),
            );
        }

        if !transaction.is_income {
            // Best-effort accumulator release; the transaction itself is gone.
            if let Err(err) = self
                .budget_service
                .release_spend(requester_id, transaction.category, transaction.amount)
                .await
            {
                warn!(
                    "Failed to release spend for deleted transaction {}: {}",
                    transaction_id, err
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budgets::{Budget, BudgetSummary, NewBudget};
    use crate::errors::DatabaseError;
    use crate::transactions::{RecurringFrequency, TransactionCategory};
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::RwLock;

    struct MockTransactionRepository {
        transactions: RwLock<Vec<Transaction>>,
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
            self.transactions
                .read()
                .unwrap()
                .iter()
                .find(|t| t.id == transaction_id)
                .cloned()
                .ok_or_else(|| DatabaseError::NotFound(transaction_id.to_string()).into())
        }

        fn list_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>> {
            let mut rows: Vec<Transaction> = self
                .transactions
                .read()
                .unwrap()
                .iter()
                .filter(|t| t.owner_id == owner_id)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(rows)
        }

        async fn insert_transaction(
            &self,
            owner_id: &str,
            new_transaction: NewTransaction,
        ) -> Result<Transaction> {
            let transaction = Transaction {
                id: uuid::Uuid::new_v4().to_string(),
                owner_id: owner_id.to_string(),
                amount: new_transaction.amount,
                description: new_transaction.description,
                category: new_transaction.category,
                is_income: new_transaction.is_income,
                is_recurring: new_transaction.is_recurring,
                recurring_frequency: new_transaction.recurring_frequency,
                date: new_transaction.date,
                created_at: Utc::now(),
            };
            self.transactions.write().unwrap().push(transaction.clone());
            Ok(transaction)
        }

        async fn delete_transaction(
            &self,
            transaction_id: &str,
            owner_id: &str,
        ) -> Result<usize> {
            let mut rows = self.transactions.write().unwrap();
            let before = rows.len();
            rows.retain(|t| !(t.id == transaction_id && t.owner_id == owner_id));
            Ok(before - rows.len())
        }
    }

    /// Records aggregator calls so tests can assert what reached budgets.
    #[derive(Default)]
    struct SpyBudgetService {
        recorded: RwLock<HashMap<String, f64>>,
        released: RwLock<HashMap<String, f64>>,
    }

    #[async_trait]
    impl BudgetServiceTrait for SpyBudgetService {
        fn list_budgets(&self, _owner_id: &str) -> Result<Vec<Budget>> {
            Ok(Vec::new())
        }

        fn summarize(&self, _owner_id: &str) -> Result<BudgetSummary> {
            unimplemented!()
        }

        async fn create_budget(&self, _owner_id: &str, _new_budget: NewBudget) -> Result<Budget> {
            unimplemented!()
        }

        async fn record_spend(
            &self,
            _owner_id: &str,
            category: TransactionCategory,
            amount: f64,
        ) -> Result<()> {
            *self
                .recorded
                .write()
                .unwrap()
                .entry(category.as_str().to_string())
                .or_insert(0.0) += amount;
            Ok(())
        }

        async fn release_spend(
            &self,
            _owner_id: &str,
            category: TransactionCategory,
            amount: f64,
        ) -> Result<()> {
            *self
                .released
                .write()
                .unwrap()
                .entry(category.as_str().to_string())
                .or_insert(0.0) += amount;
            Ok(())
        }
    }

    fn make_service() -> (TransactionService, Arc<SpyBudgetService>) {
        let budgets = Arc::new(SpyBudgetService::default());
        let service = TransactionService::new(
            Arc::new(MockTransactionRepository {
                transactions: RwLock::new(Vec::new()),
            }),
            budgets.clone(),
        );
        (service, budgets)
    }

    fn expense(amount: f64, category: TransactionCategory) -> NewTransaction {
        NewTransaction {
            amount,
            description: "coffee".to_string(),
            category,
            is_income: false,
            is_recurring: false,
            recurring_frequency: None,
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn expense_feeds_budget_aggregator() {
        let (service, budgets) = make_service();

        service
            .create_transaction("u1", expense(12.5, TransactionCategory::Food))
            .await
            .unwrap();

        assert_eq!(budgets.recorded.read().unwrap().get("food"), Some(&12.5));
    }

    #[tokio::test]
    async fn income_never_touches_budgets() {
        let (service, budgets) = make_service();

        let mut deposit = expense(1000.0, TransactionCategory::Income);
        deposit.is_income = true;
        service.create_transaction("u1", deposit).await.unwrap();

        assert!(budgets.recorded.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn recurring_requires_frequency() {
        let (service, _) = make_service();

        let mut subscription = expense(9.99, TransactionCategory::Entertainment);
        subscription.is_recurring = true;
        let err = service
            .create_transaction("u1", subscription)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let mut subscription = expense(9.99, TransactionCategory::Entertainment);
        subscription.is_recurring = true;
        subscription.recurring_frequency = Some(RecurringFrequency::Monthly);
        assert!(service.create_transaction("u1", subscription).await.is_ok());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (service, _) = make_service();

        let mut older = expense(1.0, TransactionCategory::Food);
        older.date = Utc::now() - chrono::Duration::days(2);
        let newer = expense(2.0, TransactionCategory::Food);

        service.create_transaction("u1", older).await.unwrap();
        service.create_transaction("u1", newer).await.unwrap();

        let listed = service.list_transactions("u1").unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].amount, 2.0);
        assert_eq!(listed[1].amount, 1.0);
    }

    #[tokio::test]
    async fn delete_checks_ownership_and_releases_spend() {
        let (service, budgets) = make_service();

        let created = service
            .create_transaction("u1", expense(30.0, TransactionCategory::Shopping))
            .await
            .unwrap();

        let err = service
            .delete_transaction(&created.id, "intruder")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));

        service.delete_transaction(&created.id, "u1").await.unwrap();
        assert_eq!(
            budgets.released.read().unwrap().get("shopping"),
            Some(&30.0)
        );

        let err = service
            .delete_transaction(&created.id, "u1")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
