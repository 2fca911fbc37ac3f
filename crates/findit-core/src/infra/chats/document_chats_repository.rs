// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::debug;

use crate::domain::chats::models::ChatSummary;
use crate::domain::chats::repos::ChatsRepository;
use crate::domain::shared::models::{LiveQuery, UserId};
use crate::infra::documents::{keys, Direction, DynDocumentStore, Query};

use super::chat_record::ChatRecord;
use super::live_documents::watch_documents;

pub struct DocumentChatsRepository {
    store: DynDocumentStore,
}

impl DocumentChatsRepository {
    pub fn new(store: DynDocumentStore) -> Self {
        Self { store }
    }
}

impl ChatsRepository for DocumentChatsRepository {
    fn watch_chats_for_user(&self, user_id: &UserId) -> LiveQuery<Vec<ChatSummary>> {
        debug!("Watching chats of {user_id}…");

        let query = Query::collection(keys::CHATS)
            .where_array_contains(keys::PARTICIPANT_IDS, user_id.as_ref())
            .order_by(keys::LAST_TIMESTAMP, Direction::Descending);

        watch_documents(self.store.clone(), query, |document| {
            Ok(document.decode::<ChatRecord>()?.into_summary(document))
        })
    }
}
