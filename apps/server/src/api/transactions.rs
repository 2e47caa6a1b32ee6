use std::sync::Arc;

use crate::api::shared::ApiJson;
use crate::auth::CurrentUser;
use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use serde_json::json;

use finwise_core::transactions::{NewTransaction, Transaction};

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state.transaction_service.list_transactions(&owner_id)?;
    Ok(Json(transactions))
}

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    ApiJson(new_transaction): ApiJson<NewTransaction>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let transaction = state
        .transaction_service
        .create_transaction(&owner_id, new_transaction)
        .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

async fn delete_transaction(
    Path(transaction_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> ApiResult<Json<serde_json::Value>> {
    state
        .transaction_service
        .delete_transaction(&transaction_id, &owner_id)
        .await?;
    Ok(Json(json!({ "success": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/transactions/{id}", delete(delete_transaction))
}
