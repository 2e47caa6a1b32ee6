use finwise_core::assistant::{
    AiTip, AssistantRepositoryTrait, ChatMessage, MessageSender, TipCategory,
};
use finwise_core::Result;

use super::model::{AiTipDB, ChatMessageDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{ai_tips, chat_messages};
use async_trait::async_trait;
use diesel::prelude::*;

pub struct AssistantRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl AssistantRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        AssistantRepository { pool, writer }
    }
}

#[async_trait]
impl AssistantRepositoryTrait for AssistantRepository {
    fn recent_messages(&self, owner_id: &str, limit: i64) -> Result<Vec<ChatMessage>> {
        let mut conn = get_connection(&self.pool)?;
        let messages_db = chat_messages::table
            .filter(chat_messages::owner_id.eq(owner_id))
            .order(chat_messages::created_at.desc())
            .limit(limit)
            .load::<ChatMessageDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(messages_db.into_iter().map(ChatMessage::from).collect())
    }

    async fn insert_message(
        &self,
        owner_id: &str,
        content: &str,
        sender: MessageSender,
    ) -> Result<ChatMessage> {
        let message_db = ChatMessageDB::from_new(owner_id, content, sender);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ChatMessage> {
                let result_db = diesel::insert_into(chat_messages::table)
                    .values(&message_db)
                    .returning(ChatMessageDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(ChatMessage::from(result_db))
            })
            .await
    }

    fn recent_tips(&self, owner_id: &str, limit: i64) -> Result<Vec<AiTip>> {
        let mut conn = get_connection(&self.pool)?;
        let tips_db = ai_tips::table
            .filter(ai_tips::owner_id.eq(owner_id))
            .order(ai_tips::created_at.desc())
            .limit(limit)
            .load::<AiTipDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(tips_db.into_iter().map(AiTip::from).collect())
    }

    async fn insert_tip(
        &self,
        owner_id: &str,
        content: &str,
        category: TipCategory,
        relevance_score: f64,
    ) -> Result<AiTip> {
        let tip_db = AiTipDB::from_new(owner_id, content, category, relevance_score);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<AiTip> {
                let result_db = diesel::insert_into(ai_tips::table)
                    .values(&tip_db)
                    .returning(AiTipDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(AiTip::from(result_db))
            })
            .await
    }
}
