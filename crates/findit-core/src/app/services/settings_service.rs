// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};

use findit_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynLanguageRepository};

#[derive(InjectDependencies)]
pub struct SettingsService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    language_repo: DynLanguageRepository,
}

impl SettingsService {
    /// The stored language code or the configured default.
    pub async fn app_language(&self) -> Result<String> {
        let language = self
            .language_repo
            .get()
            .await?
            .filter(|language| !language.trim().is_empty())
            .unwrap_or_else(|| self.ctx.config.default_language.clone());
        Ok(language)
    }

    pub async fn set_app_language(&self, language: &str) -> Result<()> {
        let language = language.trim();
        if language.is_empty() {
            bail!("Language code must not be empty.");
        }
        self.language_repo.set(language).await
    }
}
