// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use mime::Mime;
use url::Url;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BlobStorage: Send + Sync {
    /// Stores `data` at `path`, replacing what was there, and returns a publicly resolvable URL.
    async fn upload(&self, path: &str, data: Vec<u8>, media_type: &Mime) -> Result<Url>;
}
