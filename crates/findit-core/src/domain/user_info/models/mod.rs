// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use user_profile::{UserProfile, UNKNOWN_USER_NAME};
pub use validation_result::ValidationResult;

mod user_profile;
mod validation_result;
