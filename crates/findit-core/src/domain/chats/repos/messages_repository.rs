// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::chats::models::{ChatId, ChatMessage};
use crate::domain::shared::models::LiveQuery;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagesRepository: Send + Sync {
    /// Watches the messages of `chat_id`, oldest first.
    fn watch_messages(&self, chat_id: &ChatId) -> LiveQuery<Vec<ChatMessage>>;

    /// Appends `message` and updates the chat's last activity.
    async fn append(&self, chat_id: &ChatId, message: &ChatMessage) -> Result<()>;
}
