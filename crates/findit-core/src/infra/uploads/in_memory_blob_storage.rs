// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{format_err, Result};
use async_trait::async_trait;
use mime::Mime;
use parking_lot::RwLock;
use url::Url;

use crate::domain::uploads::services::BlobStorage;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredBlob {
    pub media_type: Mime,
    pub data: Vec<u8>,
}

/// Keeps uploaded blobs in memory and hands out URLs relative to `base_url`. Clones share
/// their contents.
#[derive(Clone)]
pub struct InMemoryBlobStorage {
    base_url: Url,
    blobs: Arc<RwLock<HashMap<String, StoredBlob>>>,
}

impl InMemoryBlobStorage {
    pub fn new(mut base_url: Url) -> Self {
        // Without a trailing slash `Url::join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            blobs: Default::default(),
        }
    }

    pub fn get(&self, path: &str) -> Option<StoredBlob> {
        self.blobs.read().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.read().is_empty()
    }
}

#[async_trait]
impl BlobStorage for InMemoryBlobStorage {
    async fn upload(&self, path: &str, data: Vec<u8>, media_type: &Mime) -> Result<Url> {
        if data.is_empty() {
            return Err(format_err!("Refusing to store an empty blob at '{path}'."));
        }

        let url = self.base_url.join(path)?;
        self.blobs.write().insert(
            path.to_string(),
            StoredBlob {
                media_type: media_type.clone(),
                data,
            },
        );
        Ok(url)
    }
}
