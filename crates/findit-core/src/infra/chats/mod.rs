// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use document_chats_repository::DocumentChatsRepository;
pub use document_messages_repository::DocumentMessagesRepository;

mod chat_record;
mod document_chats_repository;
mod document_messages_repository;
mod live_documents;
