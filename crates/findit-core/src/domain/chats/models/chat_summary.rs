// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use findit_utils::id_string;

use crate::domain::shared::models::UserId;

id_string!(ChatId);

/// A conversation as listed for one of its participants. Owned by the document store.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSummary {
    pub id: ChatId,
    pub participant_ids: Vec<UserId>,
    pub last_message: Option<String>,
    pub last_timestamp: DateTime<Utc>,
}

impl ChatSummary {
    /// The first participant who isn't `user_id`.
    pub fn partner_of(&self, user_id: &UserId) -> Option<&UserId> {
        self.participant_ids.iter().find(|id| *id != user_id)
    }
}
