// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::domain::account::services::AuthService;
use crate::domain::chats::repos::{ChatsRepository, MessagesRepository};
use crate::domain::general::services::{IDProvider, TimeProvider};
use crate::domain::images::services::ImageSource;
use crate::domain::settings::repos::LanguageRepository;
use crate::domain::uploads::services::BlobStorage;
use crate::domain::user_info::repos::UserProfileRepository;

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynAuthService = Arc<dyn AuthService>;
pub(crate) type DynBlobStorage = Arc<dyn BlobStorage>;
pub(crate) type DynChatsRepository = Arc<dyn ChatsRepository>;
pub(crate) type DynIDProvider = Arc<dyn IDProvider>;
pub(crate) type DynImageSource = Arc<dyn ImageSource>;
pub(crate) type DynLanguageRepository = Arc<dyn LanguageRepository>;
pub(crate) type DynMessagesRepository = Arc<dyn MessagesRepository>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;
pub(crate) type DynUserProfileRepository = Arc<dyn UserProfileRepository>;

pub struct AppDependencies {
    pub auth_service: DynAuthService,
    pub blob_storage: DynBlobStorage,
    pub chats_repo: DynChatsRepository,
    pub ctx: DynAppContext,
    pub id_provider: DynIDProvider,
    pub image_source: DynImageSource,
    pub language_repo: DynLanguageRepository,
    pub messages_repo: DynMessagesRepository,
    pub time_provider: DynTimeProvider,
    pub user_profile_repo: DynUserProfileRepository,
}
