// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::pin::pin;

use futures::{Stream, StreamExt};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::app::deps::AppDependencies;
use crate::app::services::{AccountService, ProfileImageService};
use crate::domain::images::models::ImageReference;
use crate::domain::shared::models::{ProgressState, UserId};
use crate::domain::user_info::models::ValidationResult;
use crate::domain::user_info::services::validate_profile_fields;

use super::{EditProfileEffect, EditProfileEvent, EditProfileState};

/// Drives the profile editing screen. Events are handled one after another; state changes are
/// published through a watch channel and one-shot effects through an unbounded queue.
pub struct EditProfileCoordinator {
    account_service: AccountService,
    profile_image_service: ProfileImageService,
    state: watch::Sender<EditProfileState>,
    effects: mpsc::UnboundedSender<EditProfileEffect>,
}

impl EditProfileCoordinator {
    pub fn new(deps: &AppDependencies) -> (Self, mpsc::UnboundedReceiver<EditProfileEffect>) {
        let (effects, effects_rx) = mpsc::unbounded_channel();
        let (state, _) = watch::channel(EditProfileState::default());

        let coordinator = Self {
            account_service: AccountService::from(deps),
            profile_image_service: ProfileImageService::from(deps),
            state,
            effects,
        };
        (coordinator, effects_rx)
    }

    pub fn state(&self) -> EditProfileState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<EditProfileState> {
        self.state.subscribe()
    }

    pub async fn handle(&mut self, event: EditProfileEvent) {
        match event {
            EditProfileEvent::LoadProfile(user_id) => self.load_profile(&user_id).await,
            EditProfileEvent::ProfileChanged(profile) => {
                self.state
                    .send_modify(|state| state.user_profile = Some(profile));
            }
            EditProfileEvent::SaveClicked => self.save_profile().await,
            EditProfileEvent::ProfileImageSelected(reference) => {
                self.update_profile_image(reference).await
            }
        }
    }
}

impl EditProfileCoordinator {
    async fn load_profile(&self, user_id: &UserId) {
        match self.drive(self.account_service.load_profile(user_id)).await {
            Ok(profile) => self
                .state
                .send_modify(|state| state.user_profile = Some(profile)),
            Err(message) => self.emit(EditProfileEffect::ShowError(message)),
        }
    }

    async fn save_profile(&self) {
        let Some(profile) = self.state.borrow().user_profile.clone() else {
            self.emit(EditProfileEffect::ShowError(
                "There is no profile to save.".to_string(),
            ));
            return;
        };

        if let ValidationResult::Error(message) =
            validate_profile_fields(profile.email.as_deref(), profile.phone.as_deref())
        {
            debug!("Not saving invalid profile. {message}");
            self.emit(EditProfileEffect::ShowError(message));
            return;
        }

        match self.drive(self.account_service.update_profile(profile)).await {
            Ok(()) => {
                // The password was handed off, there's no reason to hold on to it.
                self.state.send_modify(|state| {
                    if let Some(profile) = state.user_profile.as_mut() {
                        profile.password = None;
                    }
                });
                self.emit(EditProfileEffect::ProfileSaved)
            }
            Err(message) => self.emit(EditProfileEffect::ShowError(message)),
        }
    }

    async fn update_profile_image(&self, reference: ImageReference) {
        match self
            .drive(self.profile_image_service.process_and_upload(reference))
            .await
        {
            Ok(url) => {
                self.state.send_modify(|state| {
                    if let Some(profile) = state.user_profile.as_mut() {
                        profile.profile_image_url = Some(url.clone());
                    }
                });
                self.emit(EditProfileEffect::ProfileImageUpdated(url))
            }
            Err(message) => self.emit(EditProfileEffect::ShowError(message)),
        }
    }

    /// Mirrors the loading states of `states` and returns its outcome.
    async fn drive<T>(&self, states: impl Stream<Item = ProgressState<T>>) -> Result<T, String> {
        let mut states = pin!(states);

        let outcome = loop {
            match states.next().await {
                Some(ProgressState::Loading(is_loading)) => self.set_loading(is_loading),
                Some(ProgressState::Success(value)) => break Ok(value),
                Some(ProgressState::Error(message)) => break Err(message),
                None => break Err("The operation ended unexpectedly.".to_string()),
            }
        };

        self.set_loading(false);
        outcome
    }

    fn set_loading(&self, is_loading: bool) {
        self.state.send_if_modified(|state| {
            let changed = state.is_loading != is_loading;
            state.is_loading = is_loading;
            changed
        });
    }

    fn emit(&self, effect: EditProfileEffect) {
        info!("Edit profile effect: {effect:?}");
        if self.effects.send(effect).is_err() {
            debug!("Dropped effect since nobody is listening.");
        }
    }
}
