// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::app::deps::AppConfig;
pub use crate::app::edit_profile::{EditProfileEffect, EditProfileEvent, EditProfileState};
pub use crate::domain::chats::models::{ChatId, ChatMessage, ChatSummary, MessageId};
pub use crate::domain::images::models::{ImageOrientation, ImageReference};
pub use crate::domain::shared::models::{Failure, LiveQuery, ProgressState, UserId};
pub use crate::domain::user_info::models::{UserProfile, ValidationResult, UNKNOWN_USER_NAME};
