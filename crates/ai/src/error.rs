//! Assistant error types.

use finwise_core::Error as CoreError;
use thiserror::Error;

/// Assistant errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for the completion provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Completion provider call failed (network, timeout, or API error).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Core error from finwise-core.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
