// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use findit_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAuthService, DynChatsRepository, DynIDProvider, DynMessagesRepository, DynTimeProvider,
};
use crate::domain::chats::models::{ChatId, ChatMessage, ChatSummary, MessageId};
use crate::domain::shared::models::{Failure, LiveQuery, UserId};

#[derive(InjectDependencies)]
pub struct ChatsService {
    #[inject]
    auth_service: DynAuthService,
    #[inject]
    chats_repo: DynChatsRepository,
    #[inject]
    id_provider: DynIDProvider,
    #[inject]
    messages_repo: DynMessagesRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

impl ChatsService {
    /// Watches the chats `user_id` participates in. Every change to a matching chat produces a
    /// new, complete list ordered by last activity, newest first. Dropping the returned query
    /// detaches it from the backend.
    pub fn watch_chats(&self, user_id: &UserId) -> Result<LiveQuery<Vec<ChatSummary>>, Failure> {
        if user_id.is_empty() {
            return Err(Failure::Validation("User id must not be empty.".to_string()));
        }
        Ok(self.chats_repo.watch_chats_for_user(user_id))
    }

    pub fn watch_current_user_chats(&self) -> Result<LiveQuery<Vec<ChatSummary>>, Failure> {
        let user_id = self
            .auth_service
            .current_user_id()
            .ok_or(Failure::NotSignedIn)?;
        self.watch_chats(&user_id)
    }

    /// Watches the messages of `chat_id`, oldest first.
    pub fn watch_messages(&self, chat_id: &ChatId) -> Result<LiveQuery<Vec<ChatMessage>>, Failure> {
        if chat_id.is_empty() {
            return Err(Failure::Validation("Chat id must not be empty.".to_string()));
        }
        Ok(self.messages_repo.watch_messages(chat_id))
    }

    /// Sends `text` as the signed-in user and returns the stored message.
    pub async fn send_message(
        &self,
        chat_id: &ChatId,
        text: impl Into<String>,
    ) -> Result<ChatMessage, Failure> {
        let sender_id = self
            .auth_service
            .current_user_id()
            .ok_or(Failure::NotSignedIn)?;

        let text = text.into();
        if text.trim().is_empty() {
            return Err(Failure::Validation("Message must not be empty.".to_string()));
        }

        let message = ChatMessage {
            id: MessageId::from(self.id_provider.new_id()),
            sender_id,
            text,
            timestamp: self.time_provider.now(),
        };

        self.messages_repo
            .append(chat_id, &message)
            .await
            .map_err(Failure::Delivery)?;

        Ok(message)
    }
}
