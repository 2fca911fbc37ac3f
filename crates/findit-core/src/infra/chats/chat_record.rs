// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::chats::models::{ChatMessage, ChatSummary};
use crate::infra::documents::Document;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ChatRecord {
    #[serde(default)]
    pub participant_ids: Vec<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MessageRecord {
    pub sender_id: String,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl ChatRecord {
    pub fn into_summary(self, document: &Document) -> ChatSummary {
        ChatSummary {
            id: document.id.clone().into(),
            participant_ids: self.participant_ids.into_iter().map(Into::into).collect(),
            last_message: self.last_message,
            last_timestamp: self.last_timestamp,
        }
    }
}

impl MessageRecord {
    pub fn into_message(self, document: &Document) -> ChatMessage {
        ChatMessage {
            id: document.id.clone().into(),
            sender_id: self.sender_id.into(),
            text: self.text,
            timestamp: self.timestamp,
        }
    }
}

impl From<&ChatMessage> for MessageRecord {
    fn from(value: &ChatMessage) -> Self {
        MessageRecord {
            sender_id: value.sender_id.to_string(),
            text: value.text.clone(),
            timestamp: value.timestamp,
        }
    }
}
