// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynAuthService, DynBlobStorage, DynIDProvider,
    DynImageSource, DynLanguageRepository, DynTimeProvider,
};
use crate::app::services::{
    AccountService, ChatsService, ProfileImageService, SettingsService, UserDataService,
};
use crate::client::ClientInner;
use crate::domain::account::services::AuthService;
use crate::domain::general::services::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};
use crate::domain::images::services::ImageSource;
use crate::domain::settings::repos::LanguageRepository;
use crate::domain::uploads::services::BlobStorage;
use crate::infra::chats::{DocumentChatsRepository, DocumentMessagesRepository};
use crate::infra::documents::{DocumentStore, DynDocumentStore};
use crate::infra::images::FsImageSource;
use crate::infra::settings::InMemoryLanguageRepository;
use crate::infra::user_info::DocumentUserProfileRepository;
use crate::Client;

pub struct UndefinedDocumentStore;
pub struct UndefinedAuthService;
pub struct UndefinedBlobStorage;

pub struct ClientBuilder<D, A, B> {
    app_config: AppConfig,
    auth_service: A,
    blob_storage: B,
    document_store: D,
    id_provider: DynIDProvider,
    image_source: DynImageSource,
    language_repo: DynLanguageRepository,
    time_provider: DynTimeProvider,
}

impl ClientBuilder<UndefinedDocumentStore, UndefinedAuthService, UndefinedBlobStorage> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            auth_service: UndefinedAuthService,
            blob_storage: UndefinedBlobStorage,
            document_store: UndefinedDocumentStore,
            id_provider: Arc::new(UUIDProvider::default()),
            image_source: Arc::new(FsImageSource::default()),
            language_repo: Arc::new(InMemoryLanguageRepository::default()),
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }
}

impl<A, B> ClientBuilder<UndefinedDocumentStore, A, B> {
    pub fn set_document_store<S: DocumentStore + 'static>(
        self,
        document_store: S,
    ) -> ClientBuilder<DynDocumentStore, A, B> {
        ClientBuilder {
            app_config: self.app_config,
            auth_service: self.auth_service,
            blob_storage: self.blob_storage,
            document_store: Arc::new(document_store),
            id_provider: self.id_provider,
            image_source: self.image_source,
            language_repo: self.language_repo,
            time_provider: self.time_provider,
        }
    }
}

impl<D, B> ClientBuilder<D, UndefinedAuthService, B> {
    pub fn set_auth_service<S: AuthService + 'static>(
        self,
        auth_service: S,
    ) -> ClientBuilder<D, DynAuthService, B> {
        ClientBuilder {
            app_config: self.app_config,
            auth_service: Arc::new(auth_service),
            blob_storage: self.blob_storage,
            document_store: self.document_store,
            id_provider: self.id_provider,
            image_source: self.image_source,
            language_repo: self.language_repo,
            time_provider: self.time_provider,
        }
    }
}

impl<D, A> ClientBuilder<D, A, UndefinedBlobStorage> {
    pub fn set_blob_storage<S: BlobStorage + 'static>(
        self,
        blob_storage: S,
    ) -> ClientBuilder<D, A, DynBlobStorage> {
        ClientBuilder {
            app_config: self.app_config,
            auth_service: self.auth_service,
            blob_storage: Arc::new(blob_storage),
            document_store: self.document_store,
            id_provider: self.id_provider,
            image_source: self.image_source,
            language_repo: self.language_repo,
            time_provider: self.time_provider,
        }
    }
}

impl<D, A, B> ClientBuilder<D, A, B> {
    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_image_source<S: ImageSource + 'static>(mut self, image_source: S) -> Self {
        self.image_source = Arc::new(image_source);
        self
    }

    pub fn set_language_repository<R: LanguageRepository + 'static>(
        mut self,
        language_repo: R,
    ) -> Self {
        self.language_repo = Arc::new(language_repo);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }
}

impl ClientBuilder<DynDocumentStore, DynAuthService, DynBlobStorage> {
    pub fn build(self) -> Client {
        let store = self.document_store;

        let deps = AppDependencies {
            auth_service: self.auth_service,
            blob_storage: self.blob_storage,
            chats_repo: Arc::new(DocumentChatsRepository::new(store.clone())),
            ctx: Arc::new(AppContext::new(self.app_config)),
            id_provider: self.id_provider,
            image_source: self.image_source,
            language_repo: self.language_repo,
            messages_repo: Arc::new(DocumentMessagesRepository::new(store.clone())),
            time_provider: self.time_provider,
            user_profile_repo: Arc::new(DocumentUserProfileRepository::new(store)),
        };

        let client_inner = Arc::new(ClientInner {
            account: AccountService::from(&deps),
            chats: ChatsService::from(&deps),
            profile_image: ProfileImageService::from(&deps),
            settings: SettingsService::from(&deps),
            user_data: UserDataService::from(&deps),
            deps,
        });

        Client::from(client_inner)
    }
}
