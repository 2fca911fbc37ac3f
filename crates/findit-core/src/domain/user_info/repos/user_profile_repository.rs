// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::domain::shared::models::UserId;
use crate::domain::user_info::models::UserProfile;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserProfileRepository: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Option<UserProfile>>;

    /// Writes name, surname, phone and email. Leaves the profile image reference untouched
    /// and never writes the password.
    async fn update(&self, user_id: &UserId, profile: &UserProfile) -> Result<()>;

    async fn set_profile_image_url(&self, user_id: &UserId, url: &Url) -> Result<()>;
}
