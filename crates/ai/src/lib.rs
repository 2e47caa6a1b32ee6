//! FinWise AI - assistant services over a narrow completion interface.
//!
//! The generative-text service is a pure external collaborator behind
//! [`CompletionProviderTrait`]: one prompt in, one text out. Two backings
//! exist - a real upstream call ([`GeminiProvider`]) and deterministic
//! scripted replies ([`CannedProvider`]) - and nothing outside this crate
//! knows which one is wired in.
//!
//! - `chat`: conversation round-trips persisted through `finwise-core`
//! - `tips`: generated money-saving tips
//! - `providers`: the completion interface and its backings
//! - `error`: assistant error types

pub mod chat;
pub mod error;
pub mod providers;
pub mod tips;

// Re-export main types for convenience
pub use chat::ChatService;
pub use error::AiError;
pub use providers::{CannedProvider, CompletionProviderTrait, GeminiProvider};
pub use tips::TipService;
