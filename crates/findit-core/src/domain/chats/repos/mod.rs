// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chats_repository::ChatsRepository;
pub use messages_repository::MessagesRepository;

mod chats_repository;
mod messages_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::chats_repository::MockChatsRepository;
    pub use super::messages_repository::MockMessagesRepository;
}
