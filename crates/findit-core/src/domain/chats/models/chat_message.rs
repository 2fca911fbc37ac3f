// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use findit_utils::id_string;

use crate::domain::shared::models::UserId;

id_string!(MessageId);

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender_id: UserId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
