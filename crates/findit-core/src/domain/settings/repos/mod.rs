// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use language_repository::LanguageRepository;

mod language_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::language_repository::MockLanguageRepository;
}
