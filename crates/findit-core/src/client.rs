// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::deps::AppDependencies;
use crate::app::edit_profile::{EditProfileCoordinator, EditProfileEffect};
use crate::app::services::{
    AccountService, ChatsService, ProfileImageService, SettingsService, UserDataService,
};
use crate::client_builder::{
    ClientBuilder, UndefinedAuthService, UndefinedBlobStorage, UndefinedDocumentStore,
};
use crate::domain::shared::models::UserId;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    pub fn builder(
    ) -> ClientBuilder<UndefinedDocumentStore, UndefinedAuthService, UndefinedBlobStorage> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub account: AccountService,
    pub chats: ChatsService,
    pub profile_image: ProfileImageService,
    pub settings: SettingsService,
    pub user_data: UserDataService,
    pub(crate) deps: AppDependencies,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn current_user_id(&self) -> Option<UserId> {
        self.account.current_user_id()
    }

    /// Creates a coordinator for a profile editing screen together with the receiving end of
    /// its effects.
    pub fn edit_profile(
        &self,
    ) -> (
        EditProfileCoordinator,
        UnboundedReceiver<EditProfileEffect>,
    ) {
        EditProfileCoordinator::new(&self.deps)
    }
}
