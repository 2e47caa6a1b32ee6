//! Assistant domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message of the assistant conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub owner_id: String,
    pub content: String,
    pub sender: MessageSender,
    pub created_at: DateTime<Utc>,
}

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    User,
    Assistant,
}

impl MessageSender {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSender::User => "user",
            MessageSender::Assistant => "assistant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(MessageSender::User),
            "assistant" => Some(MessageSender::Assistant),
            _ => None,
        }
    }
}

/// A chat round-trip: the stored user message and the assistant's reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub ai_response: ChatMessage,
}

/// A generated money-saving tip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiTip {
    pub id: String,
    pub owner_id: String,
    pub content: String,
    pub category: TipCategory,
    pub is_read: bool,
    pub relevance_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Topic tag for a tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Savings,
    #[default]
    Budgeting,
    Spending,
    Investing,
    Debt,
    Goals,
}

impl TipCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipCategory::Savings => "savings",
            TipCategory::Budgeting => "budgeting",
            TipCategory::Spending => "spending",
            TipCategory::Investing => "investing",
            TipCategory::Debt => "debt",
            TipCategory::Goals => "goals",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "savings" => Some(TipCategory::Savings),
            "budgeting" => Some(TipCategory::Budgeting),
            "spending" => Some(TipCategory::Spending),
            "investing" => Some(TipCategory::Investing),
            "debt" => Some(TipCategory::Debt),
            "goals" => Some(TipCategory::Goals),
            _ => None,
        }
    }
}
