// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub const USERS: &str = "users";
pub const CHATS: &str = "chats";
pub const MESSAGES: &str = "messages";

pub const PARTICIPANT_IDS: &str = "participantIds";
pub const LAST_MESSAGE: &str = "lastMessage";
pub const LAST_TIMESTAMP: &str = "lastTimestamp";

pub const TIMESTAMP: &str = "timestamp";

pub const NAME: &str = "name";
pub const SURNAME: &str = "surname";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";
pub const PROFILE_IMAGE: &str = "profileImageUrl";

pub fn messages_collection(chat_id: &str) -> String {
    format!("{CHATS}/{chat_id}/{MESSAGES}")
}
