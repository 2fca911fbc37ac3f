// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::images::models::ImageReference;

/// Resolves an image picked by the user to its raw, still encoded bytes.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ImageSource: Send + Sync {
    async fn read(&self, reference: &ImageReference) -> Result<Vec<u8>>;
}
