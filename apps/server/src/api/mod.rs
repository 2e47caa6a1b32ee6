pub mod assistant;
pub mod auth;
pub mod budgets;
pub mod goals;
pub mod health;
pub mod shared;
pub mod transactions;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::config::Config;
use crate::main_lib::AppState;

/// Builds the full application router. Everything except auth and the health
/// probe sits behind the bearer-token middleware.
pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let protected = Router::new()
        .merge(goals::router())
        .merge(budgets::router())
        .merge(transactions::router())
        .merge(assistant::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let api = Router::new()
        .merge(auth::router())
        .merge(health::router())
        .merge(protected);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
