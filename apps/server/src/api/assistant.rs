use std::sync::Arc;

use crate::api::shared::ApiJson;
use crate::auth::CurrentUser;
use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};

use finwise_core::assistant::{AiTip, ChatExchange, ChatMessage};

#[derive(serde::Deserialize)]
struct ChatBody {
    message: String,
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
    ApiJson(body): ApiJson<ChatBody>,
) -> ApiResult<Json<ChatExchange>> {
    let exchange = state
        .chat_service
        .send_message(&owner_id, &body.message)
        .await?;
    Ok(Json(exchange))
}

async fn chat_history(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<ChatMessage>>> {
    let messages = state.chat_service.history(&owner_id)?;
    Ok(Json(messages))
}

async fn list_tips(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<AiTip>>> {
    let tips = state.tip_service.list(&owner_id)?;
    Ok(Json(tips))
}

async fn generate_tip(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(owner_id)): Extension<CurrentUser>,
) -> ApiResult<(StatusCode, Json<AiTip>)> {
    let tip = state.tip_service.generate(&owner_id).await?;
    Ok((StatusCode::CREATED, Json(tip)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assistant/chat", post(chat))
        .route("/assistant/history", get(chat_history))
        .route("/assistant/tips", get(list_tips))
        .route("/assistant/tips/generate", post(generate_tip))
}
