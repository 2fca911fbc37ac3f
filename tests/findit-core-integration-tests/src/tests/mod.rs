// findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use std::sync::Arc;

use findit_core::dtos::UserId;
use findit_core::test::{mock_data, ConstantTimeProvider, IncrementingIDProvider};
use findit_core::{AuthService, Client, Fields, InMemoryBlobStorage, InMemoryDocumentStore};

mod chats;
mod messages;
mod profile;
mod profile_image;

pub const STORAGE_BASE_URL: &str = "https://storage.findit.ge/bucket/";

/// An authentication service with a fixed user that remembers the passwords it was given.
#[derive(Clone, Default)]
pub struct StaticAuthService {
    user_id: Option<UserId>,
    passwords: Arc<Mutex<Vec<String>>>,
}

impl StaticAuthService {
    pub fn signed_in(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            passwords: Default::default(),
        }
    }

    pub fn passwords(&self) -> Vec<String> {
        self.passwords.lock().clone()
    }
}

#[async_trait]
impl AuthService for StaticAuthService {
    fn current_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }

    async fn update_password(&self, password: &Secret<String>) -> Result<()> {
        self.passwords
            .lock()
            .push(password.expose_secret().clone());
        Ok(())
    }
}

pub struct TestEnvironment {
    pub client: Client,
    pub store: InMemoryDocumentStore,
    pub blobs: InMemoryBlobStorage,
    pub auth: StaticAuthService,
}

impl TestEnvironment {
    pub fn signed_in() -> Result<Self> {
        Self::new(StaticAuthService::signed_in(mock_data::account_id()))
    }

    pub fn new(auth: StaticAuthService) -> Result<Self> {
        let store = InMemoryDocumentStore::new();
        let blobs = InMemoryBlobStorage::new(STORAGE_BASE_URL.parse()?);

        let client = Client::builder()
            .set_document_store(store.clone())
            .set_auth_service(auth.clone())
            .set_blob_storage(blobs.clone())
            .set_time_provider(ConstantTimeProvider::new(mock_data::reference_date()))
            .set_id_provider(IncrementingIDProvider::new("msg"))
            .build();

        Ok(Self {
            client,
            store,
            blobs,
            auth,
        })
    }
}

/// Converts a JSON object literal into document fields.
pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(fields) => fields,
        other => panic!("Expected a JSON object, got {other}"),
    }
}
