//! Environment-driven configuration. Collected once at startup by `main`;
//! nothing else reads the environment.

use std::time::Duration;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./data/finwise.db";
const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Credentials for bearer-token auth. When absent the API runs in
/// single-user mode and requests act as a local owner.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Argon2 PHC-string hash of the instance password.
    pub password_hash: String,
    /// Base64-encoded HMAC secret for signing access tokens.
    pub secret_key: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub auth: Option<AuthConfig>,
    pub gemini_api_key: Option<String>,
    pub completion_timeout: Duration,
    pub request_timeout: Duration,
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_secs(key: &str, default: u64) -> Duration {
    let secs = env_var(key)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_secs(secs)
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let auth = env_var("FINWISE_AUTH_PASSWORD_HASH").map(|password_hash| AuthConfig {
            password_hash,
            secret_key: env_var("FINWISE_SECRET_KEY").unwrap_or_default(),
        });

        Config {
            listen_addr: env_var("FINWISE_LISTEN_ADDR")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            db_path: env_var("FINWISE_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            auth,
            gemini_api_key: env_var("FINWISE_GEMINI_API_KEY"),
            completion_timeout: env_secs(
                "FINWISE_COMPLETION_TIMEOUT_SECS",
                DEFAULT_COMPLETION_TIMEOUT_SECS,
            ),
            request_timeout: env_secs(
                "FINWISE_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
        }
    }
}
