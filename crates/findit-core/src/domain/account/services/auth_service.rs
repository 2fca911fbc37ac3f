// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::shared::models::UserId;

/// The authentication service of the backend.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthService: Send + Sync {
    /// The signed-in user, if any.
    fn current_user_id(&self) -> Option<UserId>;

    async fn update_password(&self, password: &Secret<String>) -> Result<()>;
}
