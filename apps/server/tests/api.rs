//! End-to-end API flows in single-user mode (no password configured, canned
//! assistant responses).

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use finwise_server::{api::app_router, build_state, config::Config};
use tempfile::TempDir;
use tower::ServiceExt;

async fn build_test_router() -> (Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        auth: None,
        gemini_api_key: None,
        completion_timeout: Duration::from_secs(5),
        request_timeout: Duration::from_secs(30),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn goal_lifecycle() {
    let (app, _tmp) = build_test_router().await;

    // Validation happens before any store access
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/goals",
        Some(serde_json::json!({ "name": "", "targetAmount": 100.0 })),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["error"].is_string());

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/goals",
        Some(serde_json::json!({ "name": "Car", "targetAmount": -5 })),
    )
    .await;
    assert_eq!(status, 400);

    // Create
    let (status, goal) = send(
        &app,
        Method::POST,
        "/api/v1/goals",
        Some(serde_json::json!({
            "name": "Emergency fund",
            "targetAmount": 100.0,
            "category": "emergency",
            "priority": "high"
        })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(goal["currentAmount"], 0.0);
    assert_eq!(goal["isCompleted"], false);
    assert_eq!(goal["category"], "emergency");
    let goal_id = goal["id"].as_str().unwrap().to_string();

    // Contribute up to the threshold
    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/goals/{goal_id}"),
        Some(serde_json::json!({ "amount": 80.0 })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["currentAmount"], 80.0);
    assert_eq!(updated["targetAmount"], 100.0);
    assert_eq!(updated["isCompleted"], false);

    // Crossing the target completes the goal
    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/goals/{goal_id}"),
        Some(serde_json::json!({ "amount": 20.0 })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["currentAmount"], 100.0);
    assert_eq!(updated["isCompleted"], true);

    // Non-numeric amount is rejected with a JSON error body
    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/goals/{goal_id}"),
        Some(serde_json::json!({ "amount": "lots" })),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["error"].is_string());

    // Zero amount is rejected too
    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/goals/{goal_id}"),
        Some(serde_json::json!({ "amount": 0 })),
    )
    .await;
    assert_eq!(status, 400);

    // Contributing to an absent goal is 404
    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/v1/goals/missing",
        Some(serde_json::json!({ "amount": 5.0 })),
    )
    .await;
    assert_eq!(status, 404);

    // Stats aggregate the single completed goal
    let (status, stats) = send(&app, Method::GET, "/api/v1/goals/stats", None).await;
    assert_eq!(status, 200);
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["ongoing"], 0);
    assert_eq!(stats["totalTargetAmount"], 100.0);
    assert_eq!(stats["totalSavedAmount"], 100.0);

    // Status filters
    let (_, completed) = send(&app, Method::GET, "/api/v1/goals?status=completed", None).await;
    assert_eq!(completed.as_array().unwrap().len(), 1);
    let (_, ongoing) = send(&app, Method::GET, "/api/v1/goals?status=ongoing", None).await;
    assert_eq!(ongoing.as_array().unwrap().len(), 0);

    // Delete, then delete again
    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/goals/{goal_id}"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert!(body["message"].is_string());

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/goals/{goal_id}"),
        None,
    )
    .await;
    assert_eq!(status, 404);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_goal_contributions_are_not_lost() {
    let (app, _tmp) = build_test_router().await;

    let (_, goal) = send(
        &app,
        Method::POST,
        "/api/v1/goals",
        Some(serde_json::json!({ "name": "Bike", "targetAmount": 100.0 })),
    )
    .await;
    let goal_id = goal["id"].as_str().unwrap().to_string();

    let first = {
        let app = app.clone();
        let uri = format!("/api/v1/goals/{goal_id}");
        tokio::spawn(async move {
            send(&app, Method::PATCH, &uri, Some(serde_json::json!({ "amount": 10.0 }))).await
        })
    };
    let second = {
        let app = app.clone();
        let uri = format!("/api/v1/goals/{goal_id}");
        tokio::spawn(async move {
            send(&app, Method::PATCH, &uri, Some(serde_json::json!({ "amount": 10.0 }))).await
        })
    };
    let (status_a, _) = first.await.unwrap();
    let (status_b, _) = second.await.unwrap();
    assert_eq!(status_a, 200);
    assert_eq!(status_b, 200);

    let (_, goals) = send(&app, Method::GET, "/api/v1/goals", None).await;
    assert_eq!(goals[0]["currentAmount"], 20.0);
}

#[tokio::test]
async fn budgets_and_transactions_flow() {
    let (app, _tmp) = build_test_router().await;

    // Two budgets
    let (status, food) = send(
        &app,
        Method::POST,
        "/api/v1/budgets",
        Some(serde_json::json!({ "category": "food", "amount": 200.0, "period": "monthly" })),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(food["limit"], 200.0);
    assert_eq!(food["currentSpent"], 0.0);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/budgets",
        Some(serde_json::json!({ "category": "housing", "amount": 300.0, "period": "monthly" })),
    )
    .await;
    assert_eq!(status, 201);

    // A zero limit is rejected
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/budgets",
        Some(serde_json::json!({ "category": "food", "amount": 0, "period": "monthly" })),
    )
    .await;
    assert_eq!(status, 400);

    // Expenses accrue into their budgets
    let (status, spent) = send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(serde_json::json!({
            "amount": 50.0,
            "description": "groceries",
            "category": "food",
            "isIncome": false,
            "isRecurring": false,
            "date": "2025-06-10T12:00:00.000Z"
        })),
    )
    .await;
    assert_eq!(status, 201);
    let food_tx_id = spent["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(serde_json::json!({
            "amount": 300.0,
            "description": "rent",
            "category": "housing",
            "isIncome": false,
            "isRecurring": true,
            "recurringFrequency": "monthly",
            "date": "2025-06-01T09:00:00.000Z"
        })),
    )
    .await;
    assert_eq!(status, 201);

    // Income must not touch any budget
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(serde_json::json!({
            "amount": 2000.0,
            "description": "salary",
            "category": "income",
            "isIncome": true,
            "isRecurring": false,
            "date": "2025-06-05T08:00:00.000Z"
        })),
    )
    .await;
    assert_eq!(status, 201);

    // Summary over {limit 200, spent 50} and {limit 300, spent 300}
    let (status, summary) = send(&app, Method::GET, "/api/v1/budgets/summary", None).await;
    assert_eq!(status, 200);
    assert_eq!(summary["totalBudget"], 500.0);
    assert_eq!(summary["totalSpent"], 350.0);
    assert_eq!(summary["remaining"], 150.0);
    assert_eq!(summary["percentUsed"], 70.0);

    let categories = summary["categories"].as_array().unwrap();
    let housing = categories
        .iter()
        .find(|c| c["category"] == "housing")
        .unwrap();
    assert_eq!(housing["percentUsed"], 100.0);
    assert_eq!(housing["alertLevel"], "critical");
    let food_summary = categories.iter().find(|c| c["category"] == "food").unwrap();
    assert_eq!(food_summary["alertLevel"], "nominal");

    // Transactions list newest first by attributed date
    let (_, transactions) = send(&app, Method::GET, "/api/v1/transactions", None).await;
    let transactions = transactions.as_array().unwrap();
    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[0]["description"], "groceries");
    assert_eq!(transactions[2]["description"], "rent");

    // A recurring transaction without a frequency is invalid
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(serde_json::json!({
            "amount": 9.99,
            "description": "streaming",
            "category": "entertainment",
            "isIncome": false,
            "isRecurring": true,
            "date": "2025-06-05T08:00:00.000Z"
        })),
    )
    .await;
    assert_eq!(status, 400);

    // Deleting the groceries expense releases its accrued spend
    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/transactions/{food_tx_id}"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let (_, summary) = send(&app, Method::GET, "/api/v1/budgets/summary", None).await;
    assert_eq!(summary["totalSpent"], 300.0);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/transactions/{food_tx_id}"),
        None,
    )
    .await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn budget_summary_with_no_budgets_is_all_zeros() {
    let (app, _tmp) = build_test_router().await;

    let (status, summary) = send(&app, Method::GET, "/api/v1/budgets/summary", None).await;
    assert_eq!(status, 200);
    assert_eq!(summary["totalBudget"], 0.0);
    assert_eq!(summary["totalSpent"], 0.0);
    assert_eq!(summary["remaining"], 0.0);
    assert_eq!(summary["percentUsed"], 0.0);
}

#[tokio::test]
async fn assistant_chat_and_tips() {
    let (app, _tmp) = build_test_router().await;

    let (status, exchange) = send(
        &app,
        Method::POST,
        "/api/v1/assistant/chat",
        Some(serde_json::json!({ "message": "How should I budget?" })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(exchange["userMessage"]["sender"], "user");
    assert_eq!(exchange["aiResponse"]["sender"], "assistant");
    assert!(exchange["aiResponse"]["content"].as_str().unwrap().len() > 0);

    // Empty message is rejected before anything is stored
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/assistant/chat",
        Some(serde_json::json!({ "message": "  " })),
    )
    .await;
    assert_eq!(status, 400);

    let (status, history) = send(&app, Method::GET, "/api/v1/assistant/history", None).await;
    assert_eq!(status, 200);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["sender"], "assistant");
    assert_eq!(history[1]["sender"], "user");

    let (status, tip) = send(&app, Method::POST, "/api/v1/assistant/tips/generate", None).await;
    assert_eq!(status, 201);
    assert!(tip["content"].as_str().unwrap().len() > 0);
    assert_eq!(tip["isRead"], false);

    let (status, tips) = send(&app, Method::GET, "/api/v1/assistant/tips", None).await;
    assert_eq!(status, 200);
    assert_eq!(tips.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let (app, _tmp) = build_test_router().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}
