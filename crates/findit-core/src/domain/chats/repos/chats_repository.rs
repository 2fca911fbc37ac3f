// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::chats::models::ChatSummary;
use crate::domain::shared::models::{LiveQuery, UserId};

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChatsRepository: Send + Sync {
    /// Watches all chats `user_id` participates in, most recently active first.
    fn watch_chats_for_user(&self, user_id: &UserId) -> LiveQuery<Vec<ChatSummary>>;
}
