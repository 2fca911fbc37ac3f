// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;
pub use chats_service::ChatsService;
pub use profile_image_service::ProfileImageService;
pub use settings_service::SettingsService;
pub use user_data_service::UserDataService;

mod account_service;
mod chats_service;
mod profile_image_service;
mod settings_service;
mod user_data_service;
