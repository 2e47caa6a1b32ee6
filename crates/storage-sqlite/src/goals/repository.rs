use finwise_core::goals::{
    GoalCategory, GoalRepositoryTrait, GoalStatusFilter, NewGoal, SavingsGoal,
};
use finwise_core::Result;

use super::model::GoalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;
use crate::utils::now_stored;
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use finwise_core::errors::DatabaseError;

pub struct GoalRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn get_goal(&self, goal_id: &str) -> Result<SavingsGoal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals::table
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(SavingsGoal::from(goal_db))
    }

    fn list_goals(
        &self,
        owner_id: &str,
        status: Option<GoalStatusFilter>,
        category: Option<GoalCategory>,
    ) -> Result<Vec<SavingsGoal>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = goals::table
            .filter(goals::owner_id.eq(owner_id))
            .order(goals::created_at.desc())
            .into_boxed();

        match status {
            Some(GoalStatusFilter::Completed) => {
                query = query.filter(goals::is_completed.eq(true));
            }
            Some(GoalStatusFilter::Ongoing) => {
                query = query.filter(goals::is_completed.eq(false));
            }
            None => {}
        }
        if let Some(category) = category {
            query = query.filter(goals::category.eq(category.as_str()));
        }

        let goals_db = query.load::<GoalDB>(&mut conn).map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(SavingsGoal::from).collect())
    }

    async fn insert_goal(&self, owner_id: &str, new_goal: NewGoal) -> Result<SavingsGoal> {
        let goal_db = GoalDB::from_new(owner_id, new_goal);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavingsGoal> {
                let result_db = diesel::insert_into(goals::table)
                    .values(&goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(SavingsGoal::from(result_db))
            })
            .await
    }

    async fn add_contribution(
        &self,
        goal_id: &str,
        owner_id: &str,
        amount: f64,
    ) -> Result<SavingsGoal> {
        let goal_id = goal_id.to_string();
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavingsGoal> {
                // SQL-level increment: the new amount is computed by the
                // database, never in application code, so concurrent
                // contributions cannot lose updates.
                let affected = diesel::update(
                    goals::table.filter(goals::id.eq(&goal_id).and(goals::owner_id.eq(&owner_id))),
                )
                .set((
                    goals::current_amount.eq(goals::current_amount + amount),
                    goals::updated_at.eq(now_stored()),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(DatabaseError::NotFound(goal_id.clone()).into());
                }

                // Completion is derived from the stored columns in the same
                // transaction; once true it can only stay true since progress
                // never decreases.
                diesel::update(goals::table.filter(goals::id.eq(&goal_id)))
                    .set(goals::is_completed.eq(sql::<Bool>("current_amount >= target_amount")))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = goals::table
                    .find(&goal_id)
                    .first::<GoalDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(SavingsGoal::from(result_db))
            })
            .await
    }

    async fn delete_goal(&self, goal_id: &str, owner_id: &str) -> Result<usize> {
        let goal_id = goal_id.to_string();
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    goals::table.filter(goals::id.eq(&goal_id).and(goals::owner_id.eq(&owner_id))),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
