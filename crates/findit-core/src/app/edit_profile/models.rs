// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

use crate::domain::images::models::ImageReference;
use crate::domain::shared::models::UserId;
use crate::domain::user_info::models::UserProfile;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditProfileState {
    pub user_profile: Option<UserProfile>,
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditProfileEvent {
    LoadProfile(UserId),
    ProfileChanged(UserProfile),
    SaveClicked,
    ProfileImageSelected(ImageReference),
}

/// One-shot outcomes, each delivered to the observer exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum EditProfileEffect {
    ProfileSaved,
    ProfileImageUpdated(Url),
    ShowError(String),
}
