// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use url::Url;

use crate::domain::shared::models::UserId;
use crate::domain::user_info::models::UserProfile;
use crate::domain::user_info::repos::UserProfileRepository;
use crate::infra::documents::{keys, DynDocumentStore, Fields};

pub struct DocumentUserProfileRepository {
    store: DynDocumentStore,
}

impl DocumentUserProfileRepository {
    pub fn new(store: DynDocumentStore) -> Self {
        Self { store }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    surname: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    profile_image_url: Option<String>,
}

#[async_trait]
impl UserProfileRepository for DocumentUserProfileRepository {
    async fn get(&self, user_id: &UserId) -> Result<Option<UserProfile>> {
        let Some(document) = self.store.get(keys::USERS, user_id.as_ref()).await? else {
            return Ok(None);
        };
        let record = document.decode::<UserRecord>()?;

        let profile_image_url = record
            .profile_image_url
            .filter(|url| !url.is_empty())
            .and_then(|url| match Url::parse(&url) {
                Ok(url) => Some(url),
                Err(err) => {
                    warn!("Ignoring invalid profile image URL of {user_id}. {err}");
                    None
                }
            });

        Ok(Some(UserProfile {
            name: record.name,
            surname: record.surname,
            phone: record.phone,
            email: record.email,
            password: None,
            profile_image_url,
        }))
    }

    async fn update(&self, user_id: &UserId, profile: &UserProfile) -> Result<()> {
        // Every editable key is written so that cleared fields end up as null.
        let mut fields = Fields::new();
        for (key, value) in [
            (keys::NAME, &profile.name),
            (keys::SURNAME, &profile.surname),
            (keys::PHONE, &profile.phone),
            (keys::EMAIL, &profile.email),
        ] {
            fields.insert(key.to_string(), json!(value));
        }
        self.store.set(keys::USERS, user_id.as_ref(), fields).await?;
        Ok(())
    }

    async fn set_profile_image_url(&self, user_id: &UserId, url: &Url) -> Result<()> {
        let mut fields = Fields::new();
        fields.insert(keys::PROFILE_IMAGE.to_string(), json!(url.as_str()));
        self.store.set(keys::USERS, user_id.as_ref(), fields).await?;
        Ok(())
    }
}
