//! Bearer-token authentication.
//!
//! Access tokens are HS256 JWTs whose `sub` claim is the owner id; the
//! instance password is verified against an Argon2 hash. With no password
//! configured the API runs in single-user mode: every request acts as the
//! local owner.

use std::sync::Arc;

use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::ApiError;
use crate::main_lib::AppState;

/// Owner id used when authentication is not configured.
pub const LOCAL_OWNER_ID: &str = "local";

const TOKEN_TTL_HOURS: i64 = 24;

/// Authenticated owner id, inserted by the auth middleware and read by
/// handlers through `Extension`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

pub struct AuthManager {
    password_hash: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthManager {
    pub fn new(config: &AuthConfig) -> anyhow::Result<Self> {
        // Validate the stored hash up front so a bad deployment fails at
        // startup, not at first login.
        PasswordHash::new(&config.password_hash)
            .map_err(|e| anyhow::anyhow!("Invalid FINWISE_AUTH_PASSWORD_HASH: {}", e))?;

        let secret = BASE64
            .decode(config.secret_key.trim())
            .map_err(|e| anyhow::anyhow!("Invalid FINWISE_SECRET_KEY: {}", e))?;
        if secret.len() < 32 {
            anyhow::bail!("FINWISE_SECRET_KEY must decode to at least 32 bytes");
        }

        Ok(AuthManager {
            password_hash: config.password_hash.clone(),
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
        })
    }

    /// Verifies the instance password and issues an access token for
    /// `user_id`.
    pub fn login(&self, user_id: &str, password: &str) -> Result<String, ApiError> {
        let parsed = PasswordHash::new(&self.password_hash)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))
    }

    /// Validates a bearer token and returns the owner id it carries.
    pub fn verify(&self, token: &str) -> Result<String, ApiError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?;
        Ok(data.claims.sub)
    }
}

/// Middleware guarding every protected route. Resolves the owner id and
/// stashes it as a [`CurrentUser`] extension.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let owner_id = match &state.auth {
        Some(auth) => {
            let bearer = request
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "));
            match bearer {
                Some(token) => match auth.verify(token) {
                    Ok(owner_id) => owner_id,
                    Err(err) => return err.into_response(),
                },
                None => {
                    return ApiError::Unauthorized("Authentication required".to_string())
                        .into_response()
                }
            }
        }
        None => LOCAL_OWNER_ID.to_string(),
    };

    request.extensions_mut().insert(CurrentUser(owner_id));
    next.run(request).await
}
