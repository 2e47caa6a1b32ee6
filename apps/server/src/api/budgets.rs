use std::sync::Arc;

use crate::api::shared::ApiJson;
use crate::auth::CurrentUser;
use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, http::StatusCode, routing::get, Extension, Json, Router};

use finwise_core::budgets::{Budget, BudgetSummary, NewBudget};

async fn list_budgets(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Budget>>> {
    let budgets = state.budget_service.list_budgets(&owner_id)?;
    Ok(Json(budgets))
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    ApiJson(new_budget): ApiJson<NewBudget>,
) -> ApiResult<(StatusCode, Json<Budget>)> {
    let budget = state
        .budget_service
        .create_budget(&owner_id, new_budget)
        .await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

async fn budget_summary(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> ApiResult<Json<BudgetSummary>> {
    let summary = state.budget_service.summarize(&owner_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/summary", get(budget_summary))
}
