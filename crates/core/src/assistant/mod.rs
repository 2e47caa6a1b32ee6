//! Assistant module - chat and tip domain models plus the persistence trait.
//!
//! The services driving the completion provider live in the `finwise-ai`
//! crate; this module only owns what must persist.

mod assistant_model;
mod assistant_traits;

pub use assistant_model::{AiTip, ChatExchange, ChatMessage, MessageSender, TipCategory};
pub use assistant_traits::AssistantRepositoryTrait;
