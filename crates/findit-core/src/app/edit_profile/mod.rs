// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use edit_profile_coordinator::EditProfileCoordinator;
pub use models::{EditProfileEffect, EditProfileEvent, EditProfileState};

mod edit_profile_coordinator;
mod models;
