// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::warn;
use url::Url;

use findit_proc_macros::InjectDependencies;

use crate::app::deps::DynUserProfileRepository;
use crate::domain::shared::models::UserId;
use crate::domain::user_info::models::{UserProfile, UNKNOWN_USER_NAME};

#[derive(InjectDependencies)]
pub struct UserDataService {
    #[inject]
    user_profile_repo: DynUserProfileRepository,
}

impl UserDataService {
    /// The display name of `user_id`. Falls back to a placeholder if the profile is missing,
    /// has no name or can't be read.
    pub async fn user_full_name(&self, user_id: &UserId) -> String {
        self.load_profile(user_id)
            .await
            .and_then(|profile| profile.full_name())
            .unwrap_or_else(|| UNKNOWN_USER_NAME.to_string())
    }

    pub async fn user_profile_image(&self, user_id: &UserId) -> Option<Url> {
        self.load_profile(user_id)
            .await
            .and_then(|profile| profile.profile_image_url)
    }
}

impl UserDataService {
    async fn load_profile(&self, user_id: &UserId) -> Option<UserProfile> {
        match self.user_profile_repo.get(user_id).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!("Failed to load profile of {user_id}. {err}");
                None
            }
        }
    }
}
