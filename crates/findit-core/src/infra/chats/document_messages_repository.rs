// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use crate::domain::chats::models::{ChatId, ChatMessage};
use crate::domain::chats::repos::MessagesRepository;
use crate::domain::shared::models::LiveQuery;
use crate::infra::documents::{
    keys, to_fields, Direction, DocumentStoreError, DynDocumentStore, Fields, Query,
};

use super::chat_record::MessageRecord;
use super::live_documents::watch_documents;

pub struct DocumentMessagesRepository {
    store: DynDocumentStore,
}

impl DocumentMessagesRepository {
    pub fn new(store: DynDocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MessagesRepository for DocumentMessagesRepository {
    fn watch_messages(&self, chat_id: &ChatId) -> LiveQuery<Vec<ChatMessage>> {
        let query = Query::collection(keys::messages_collection(chat_id.as_ref()))
            .order_by(keys::TIMESTAMP, Direction::Ascending);

        watch_documents(self.store.clone(), query, |document| {
            Ok(document.decode::<MessageRecord>()?.into_message(document))
        })
    }

    async fn append(&self, chat_id: &ChatId, message: &ChatMessage) -> Result<()> {
        if self.store.get(keys::CHATS, chat_id.as_ref()).await?.is_none() {
            return Err(DocumentStoreError::NotFound {
                collection: keys::CHATS.to_string(),
                id: chat_id.to_string(),
            }
            .into());
        }

        let fields = to_fields(&MessageRecord::from(message))?;

        self.store
            .set(
                &keys::messages_collection(chat_id.as_ref()),
                message.id.as_ref(),
                fields,
            )
            .await?;

        let mut chat_fields = Fields::new();
        chat_fields.insert(keys::LAST_MESSAGE.to_string(), json!(message.text));
        chat_fields.insert(
            keys::LAST_TIMESTAMP.to_string(),
            json!(message.timestamp.timestamp_millis()),
        );
        self.store
            .update(keys::CHATS, chat_id.as_ref(), chat_fields)
            .await?;

        Ok(())
    }
}
