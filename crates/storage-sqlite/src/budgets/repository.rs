use finwise_core::budgets::{Budget, BudgetRepositoryTrait, NewBudget};
use finwise_core::transactions::TransactionCategory;
use finwise_core::Result;

use super::model::BudgetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;
use crate::utils::now_stored;
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Double;

pub struct BudgetRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }

    /// Oldest budget row for `(owner, category)`. Several can exist since
    /// uniqueness holds only by convention; the aggregator always targets the
    /// oldest.
    fn find_accrual_target(
        conn: &mut SqliteConnection,
        owner: &str,
        category: TransactionCategory,
    ) -> Result<Option<String>> {
        budgets::table
            .filter(
                budgets::owner_id
                    .eq(owner)
                    .and(budgets::category.eq(category.as_str())),
            )
            .order(budgets::created_at.asc())
            .select(budgets::id)
            .first::<String>(conn)
            .optional()
            .map_err(|e| StorageError::from(e).into())
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn list_budgets(&self, owner_id: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let budgets_db = budgets::table
            .filter(budgets::owner_id.eq(owner_id))
            .order(budgets::created_at.desc())
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(budgets_db.into_iter().map(Budget::from).collect())
    }

    async fn insert_budget(&self, owner_id: &str, new_budget: NewBudget) -> Result<Budget> {
        let budget_db = BudgetDB::from_new(owner_id, new_budget);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let result_db = diesel::insert_into(budgets::table)
                    .values(&budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(result_db))
            })
            .await
    }

    async fn record_spend(
        &self,
        owner_id: &str,
        category: TransactionCategory,
        amount: f64,
    ) -> Result<Budget> {
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let result_db = match Self::find_accrual_target(conn, &owner_id, category)? {
                    Some(budget_id) => {
                        // SQL-level increment, same reasoning as goal
                        // contributions: the database computes the new total.
                        diesel::update(budgets::table.find(&budget_id))
                            .set((
                                budgets::current_spent.eq(budgets::current_spent + amount),
                                budgets::updated_at.eq(now_stored()),
                            ))
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        budgets::table
                            .find(&budget_id)
                            .first::<BudgetDB>(conn)
                            .map_err(StorageError::from)?
                    }
                    None => {
                        let placeholder =
                            BudgetDB::accrual_placeholder(&owner_id, category, amount);
                        diesel::insert_into(budgets::table)
                            .values(&placeholder)
                            .returning(BudgetDB::as_returning())
                            .get_result(conn)
                            .map_err(StorageError::from)?
                    }
                };
                Ok(Budget::from(result_db))
            })
            .await
    }

    async fn release_spend(
        &self,
        owner_id: &str,
        category: TransactionCategory,
        amount: f64,
    ) -> Result<Option<Budget>> {
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Budget>> {
                let Some(budget_id) = Self::find_accrual_target(conn, &owner_id, category)? else {
                    return Ok(None);
                };
                // Accumulator stays non-negative even if it drifted below the
                // released amount.
                diesel::update(budgets::table.find(&budget_id))
                    .set((
                        budgets::current_spent.eq(sql::<Double>("MAX(current_spent - ")
                            .bind::<Double, _>(amount)
                            .sql(", 0)")),
                        budgets::updated_at.eq(now_stored()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = budgets::table
                    .find(&budget_id)
                    .first::<BudgetDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Some(Budget::from(result_db)))
            })
            .await
    }
}
