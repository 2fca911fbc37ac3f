// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Folder in the blob storage that profile images are uploaded to.
    pub profile_images_path: String,
    /// Language code used until the user picks one.
    pub default_language: String,
}

pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn profile_image_path(&self, file_name: &str) -> String {
        let folder = self.config.profile_images_path.trim_end_matches('/');
        if folder.is_empty() {
            return file_name.to_string();
        }
        format!("{folder}/{file_name}")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile_images_path: "profile_images".to_string(),
            default_language: "en".to_string(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
