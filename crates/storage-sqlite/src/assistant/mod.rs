pub mod model;
pub mod repository;

pub use model::{AiTipDB, ChatMessageDB};
pub use repository::AssistantRepository;
