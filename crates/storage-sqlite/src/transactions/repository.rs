use finwise_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};
use finwise_core::Result;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;
use async_trait::async_trait;
use diesel::prelude::*;

pub struct TransactionRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let transaction_db = transactions::table
            .find(transaction_id)
            .first::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Transaction::from(transaction_db))
    }

    fn list_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let transactions_db = transactions::table
            .filter(transactions::owner_id.eq(owner_id))
            .order(transactions::transaction_date.desc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(transactions_db
            .into_iter()
            .map(Transaction::from)
            .collect())
    }

    async fn insert_transaction(
        &self,
        owner_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        let transaction_db = TransactionDB::from_new(owner_id, new_transaction);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let result_db = diesel::insert_into(transactions::table)
                    .values(&transaction_db)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Transaction::from(result_db))
            })
            .await
    }

    async fn delete_transaction(&self, transaction_id: &str, owner_id: &str) -> Result<usize> {
        let transaction_id = transaction_id.to_string();
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    transactions::table.filter(
                        transactions::id
                            .eq(&transaction_id)
                            .and(transactions::owner_id.eq(&owner_id)),
                    ),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
