use std::sync::Arc;

use crate::api::shared::{ApiJson, ApiQuery};
use crate::auth::CurrentUser;
use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;

use finwise_core::goals::{GoalCategory, GoalStats, GoalStatusFilter, NewGoal, SavingsGoal};

#[derive(serde::Deserialize)]
struct GoalListQuery {
    status: Option<GoalStatusFilter>,
    category: Option<GoalCategory>,
}

#[derive(serde::Deserialize)]
struct ContributeBody {
    amount: f64,
}

async fn list_goals(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    ApiQuery(query): ApiQuery<GoalListQuery>,
) -> ApiResult<Json<Vec<SavingsGoal>>> {
    let goals = state
        .goal_service
        .list_goals(&owner_id, query.status, query.category)?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    ApiJson(new_goal): ApiJson<NewGoal>,
) -> ApiResult<(StatusCode, Json<SavingsGoal>)> {
    let goal = state.goal_service.create_goal(&owner_id, new_goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn goal_stats(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> ApiResult<Json<GoalStats>> {
    let stats = state.goal_service.goal_stats(&owner_id)?;
    Ok(Json(stats))
}

async fn contribute(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    ApiJson(body): ApiJson<ContributeBody>,
) -> ApiResult<Json<SavingsGoal>> {
    let goal = state
        .goal_service
        .contribute(&goal_id, &owner_id, body.amount)
        .await?;
    Ok(Json(goal))
}

async fn delete_goal(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> ApiResult<Json<serde_json::Value>> {
    state.goal_service.delete_goal(&goal_id, &owner_id).await?;
    Ok(Json(json!({ "message": "Goal deleted successfully" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/stats", get(goal_stats))
        .route("/goals/{id}", axum::routing::patch(contribute).delete(delete_goal))
}
