// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod chats;
pub mod documents;
pub mod images;
pub mod settings;
pub mod uploads;
pub mod user_info;
