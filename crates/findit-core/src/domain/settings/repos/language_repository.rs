// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

/// Key-value preference storage holding the app's language code.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait LanguageRepository: Send + Sync {
    async fn get(&self) -> Result<Option<String>>;
    async fn set(&self, language: &str) -> Result<()>;
}
