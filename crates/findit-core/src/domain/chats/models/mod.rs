// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_message::{ChatMessage, MessageId};
pub use chat_summary::{ChatId, ChatSummary};

mod chat_message;
mod chat_summary;
