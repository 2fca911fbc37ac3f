// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::format_err;
use futures::Stream;
use tracing::{info, warn};

use findit_proc_macros::InjectDependencies;

use crate::app::deps::{DynAuthService, DynUserProfileRepository};
use crate::domain::shared::models::{Failure, ProgressState, UserId};
use crate::domain::user_info::models::{UserProfile, ValidationResult};
use crate::domain::user_info::services::validate_profile_fields;

#[derive(InjectDependencies)]
pub struct AccountService {
    #[inject]
    auth_service: DynAuthService,
    #[inject]
    user_profile_repo: DynUserProfileRepository,
}

impl AccountService {
    pub fn current_user_id(&self) -> Option<UserId> {
        self.auth_service.current_user_id()
    }

    pub fn load_profile(
        &self,
        user_id: &UserId,
    ) -> impl Stream<Item = ProgressState<UserProfile>> + Send {
        let user_id = user_id.clone();
        let repo = self.user_profile_repo.clone();

        ProgressState::track(async move {
            if user_id.is_empty() {
                return Err(Failure::Validation("User id must not be empty.".to_string()));
            }
            repo.get(&user_id)
                .await
                .map_err(Failure::Load)?
                .ok_or_else(|| Failure::Load(format_err!("No profile found for {user_id}.")))
        })
    }

    /// Validates and saves `profile` for the signed-in user. A non-empty password is handed to
    /// the authentication service after the profile document was written.
    pub fn update_profile(
        &self,
        profile: UserProfile,
    ) -> impl Stream<Item = ProgressState<()>> + Send {
        let user_id = self.current_user_id();
        let repo = self.user_profile_repo.clone();
        let auth_service = self.auth_service.clone();

        ProgressState::track(async move {
            let user_id = user_id.ok_or(Failure::NotSignedIn)?;

            if let ValidationResult::Error(message) =
                validate_profile_fields(profile.email.as_deref(), profile.phone.as_deref())
            {
                return Err(Failure::Validation(message));
            }

            repo.update(&user_id, &profile)
                .await
                .map_err(Failure::Persist)?;
            info!("Saved profile of {user_id}.");

            if let Some(password) = profile.new_password() {
                auth_service.update_password(password).await.map_err(|err| {
                    warn!("Failed to update password of {user_id}. {err}");
                    Failure::Persist(err)
                })?;
            }

            Ok(())
        })
    }
}
