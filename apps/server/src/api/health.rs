use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::main_lib::AppState;
use finwise_core::utils::time_utils::format_datetime;

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": format_datetime(chrono::Utc::now()),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
