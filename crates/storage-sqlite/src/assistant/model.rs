//! Database models for assistant chat messages and tips.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use finwise_core::assistant::{AiTip, ChatMessage, MessageSender, TipCategory};

use crate::utils::{now_stored, parse_stored_datetime};

/// Database model for chat messages
#[derive(
    Insertable, Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::chat_messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDB {
    pub id: String,
    pub owner_id: String,
    pub content: String,
    pub sender: String,
    pub created_at: String,
}

impl ChatMessageDB {
    pub fn from_new(owner_id: &str, content: &str, sender: MessageSender) -> Self {
        ChatMessageDB {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            content: content.to_string(),
            sender: sender.as_str().to_string(),
            created_at: now_stored(),
        }
    }
}

impl From<ChatMessageDB> for ChatMessage {
    fn from(db: ChatMessageDB) -> Self {
        Self {
            created_at: parse_stored_datetime(&db.created_at, "created_at"),
            sender: MessageSender::parse(&db.sender).unwrap_or_else(|| {
                log::error!("Unknown message sender '{}', assuming user", db.sender);
                MessageSender::User
            }),
            id: db.id,
            owner_id: db.owner_id,
            content: db.content,
        }
    }
}

/// Database model for tips
#[derive(
    Insertable, Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::ai_tips)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AiTipDB {
    pub id: String,
    pub owner_id: String,
    pub content: String,
    pub category: String,
    pub is_read: bool,
    pub relevance_score: f64,
    pub created_at: String,
}

impl AiTipDB {
    pub fn from_new(
        owner_id: &str,
        content: &str,
        category: TipCategory,
        relevance_score: f64,
    ) -> Self {
        AiTipDB {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            content: content.to_string(),
            category: category.as_str().to_string(),
            is_read: false,
            relevance_score,
            created_at: now_stored(),
        }
    }
}

impl From<AiTipDB> for AiTip {
    fn from(db: AiTipDB) -> Self {
        Self {
            created_at: parse_stored_datetime(&db.created_at, "created_at"),
            category: TipCategory::parse(&db.category).unwrap_or_else(|| {
                log::error!("Unknown tip category '{}', using default", db.category);
                TipCategory::default()
            }),
            id: db.id,
            owner_id: db.owner_id,
            content: db.content,
            is_read: db.is_read,
            relevance_score: db.relevance_score,
        }
    }
}
