use std::sync::Arc;

use crate::api::shared::ApiJson;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use axum::{extract::State, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody {
    user_id: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthStatus {
    requires_password: bool,
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<LoginBody>,
) -> ApiResult<Json<LoginResponse>> {
    let auth = state.auth.as_ref().ok_or_else(|| {
        ApiError::BadRequest("Authentication is not configured".to_string())
    })?;
    if body.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("userId is required".to_string()));
    }
    let access_token = auth.login(body.user_id.trim(), &body.password)?;
    Ok(Json(LoginResponse { access_token }))
}

async fn status(State(state): State<Arc<AppState>>) -> Json<AuthStatus> {
    Json(AuthStatus {
        requires_password: state.auth.is_some(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/status", get(status))
}
