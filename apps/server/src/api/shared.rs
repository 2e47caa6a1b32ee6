//! Extractors shared by the API handlers.
//!
//! Wrapping the stock extractors routes their rejections through [`ApiError`]
//! so malformed bodies and query strings also produce `{"error": ...}` JSON.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// `axum::Json` with an `{"error": ...}` rejection body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with an `{"error": ...}` rejection body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
