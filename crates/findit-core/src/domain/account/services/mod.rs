// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_service::AuthService;

mod auth_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::auth_service::MockAuthService;
}
