use std::sync::Arc;

use finwise_core::goals::{GoalRepositoryTrait, NewGoal};
use finwise_storage_sqlite::db::{self, write_actor};
use finwise_storage_sqlite::goals::GoalRepository;
use tempfile::tempdir;

fn new_goal(name: &str, target: f64) -> NewGoal {
    NewGoal {
        name: name.to_string(),
        target_amount: target,
        deadline: None,
        category: None,
        priority: None,
    }
}

async fn build_repository(db_file: &std::path::Path) -> Arc<GoalRepository> {
    let db_path = db::init(db_file.to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = write_actor::spawn_writer(pool.clone());
    Arc::new(GoalRepository::new(pool, writer))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_contributions_are_not_lost() {
    let tmp = tempdir().unwrap();
    let repository = build_repository(&tmp.path().join("finwise.db")).await;

    let goal = repository
        .insert_goal("u1", new_goal("Emergency fund", 100.0))
        .await
        .unwrap();
    assert_eq!(goal.current_amount, 0.0);
    assert!(!goal.is_completed);

    let first = {
        let repository = repository.clone();
        let goal_id = goal.id.clone();
        tokio::spawn(async move { repository.add_contribution(&goal_id, "u1", 10.0).await })
    };
    let second = {
        let repository = repository.clone();
        let goal_id = goal.id.clone();
        tokio::spawn(async move { repository.add_contribution(&goal_id, "u1", 10.0).await })
    };
    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    let stored = repository.get_goal(&goal.id).unwrap();
    assert_eq!(stored.current_amount, 20.0);
    assert!(!stored.is_completed);
}

#[tokio::test]
async fn contribution_derives_completion_and_allows_overshoot() {
    let tmp = tempdir().unwrap();
    let repository = build_repository(&tmp.path().join("finwise.db")).await;

    let goal = repository
        .insert_goal("u1", new_goal("Vacation", 100.0))
        .await
        .unwrap();

    let updated = repository
        .add_contribution(&goal.id, "u1", 80.0)
        .await
        .unwrap();
    assert_eq!(updated.current_amount, 80.0);
    assert!(!updated.is_completed);

    let updated = repository
        .add_contribution(&goal.id, "u1", 70.0)
        .await
        .unwrap();
    assert_eq!(updated.current_amount, 150.0);
    assert!(updated.is_completed);
    assert!(updated.updated_at >= updated.created_at);
}

#[tokio::test]
async fn contribution_is_scoped_to_the_owner() {
    let tmp = tempdir().unwrap();
    let repository = build_repository(&tmp.path().join("finwise.db")).await;

    let goal = repository
        .insert_goal("u1", new_goal("Laptop", 500.0))
        .await
        .unwrap();

    // A different owner never matches the scoped update.
    let err = repository
        .add_contribution(&goal.id, "someone-else", 50.0)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let stored = repository.get_goal(&goal.id).unwrap();
    assert_eq!(stored.current_amount, 0.0);
}
