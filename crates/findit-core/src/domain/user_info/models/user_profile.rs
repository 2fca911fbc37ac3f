// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::{ExposeSecret, Secret};
use url::Url;

/// Shown in place of a user's name when it can't be looked up.
pub const UNKNOWN_USER_NAME: &str = "unknown user";

/// The editable profile of a user. Every field may be missing until validated.
/// `password` is write-only: it's forwarded to the authentication service and never stored
/// with the profile.
#[derive(Debug, Default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
    pub profile_image_url: Option<Url>,
}

impl UserProfile {
    /// `"{name} {surname}"`, skipping missing parts. `None` if both are missing.
    pub fn full_name(&self) -> Option<String> {
        let parts = [self.name.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>();

        if parts.is_empty() {
            return None;
        }
        Some(parts.join(" "))
    }

    /// The password, if one was entered.
    pub fn new_password(&self) -> Option<&Secret<String>> {
        self.password
            .as_ref()
            .filter(|password| !password.expose_secret().is_empty())
    }
}

impl Clone for UserProfile {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            surname: self.surname.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            password: self
                .password
                .as_ref()
                .map(|password| Secret::new(password.expose_secret().clone())),
            profile_image_url: self.profile_image_url.clone(),
        }
    }
}

impl PartialEq for UserProfile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.surname == other.surname
            && self.phone == other.phone
            && self.email == other.email
            && self.password.as_ref().map(|password| password.expose_secret())
                == other.password.as_ref().map(|password| password.expose_secret())
            && self.profile_image_url == other.profile_image_url
    }
}
