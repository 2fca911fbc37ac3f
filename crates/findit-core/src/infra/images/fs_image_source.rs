// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::PathBuf;

use anyhow::{format_err, Result};
use async_trait::async_trait;
use url::Url;

use crate::domain::images::models::ImageReference;
use crate::domain::images::services::ImageSource;

/// Reads images from the local filesystem. References are plain paths or `file://` URLs.
#[derive(Default)]
pub struct FsImageSource {}

#[async_trait]
impl ImageSource for FsImageSource {
    async fn read(&self, reference: &ImageReference) -> Result<Vec<u8>> {
        let path = match Url::parse(reference.as_ref()) {
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map_err(|_| format_err!("Invalid file URL '{reference}'."))?,
            _ => PathBuf::from(reference.as_ref()),
        };
        Ok(tokio::fs::read(&path).await?)
    }
}
