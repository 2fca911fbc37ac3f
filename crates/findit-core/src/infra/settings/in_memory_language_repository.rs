// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::settings::repos::LanguageRepository;

#[derive(Default)]
pub struct InMemoryLanguageRepository {
    language: RwLock<Option<String>>,
}

#[async_trait]
impl LanguageRepository for InMemoryLanguageRepository {
    async fn get(&self) -> Result<Option<String>> {
        Ok(self.language.read().clone())
    }

    async fn set(&self, language: &str) -> Result<()> {
        *self.language.write() = Some(language.to_string());
        Ok(())
    }
}
