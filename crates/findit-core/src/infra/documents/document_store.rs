// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::{Document, Fields, Query};

pub type DynDocumentStore = Arc<dyn DocumentStore>;

/// Receives the complete result set of a watched query after every change.
pub type SnapshotListener = Box<dyn Fn(Result<Vec<Document>, DocumentStoreError>) + Send + Sync>;

#[derive(Error, Debug)]
pub enum DocumentStoreError {
    #[error("Document {collection}/{id} does not exist.")]
    NotFound { collection: String, id: String },

    #[error("Permission denied. {0}")]
    PermissionDenied(String),

    #[error("The document store is unavailable. {0}")]
    Unavailable(String),

    #[error("Failed to decode document {id}. {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Keeps a watch alive until removed.
pub trait ListenerRegistration: Send {
    fn remove(self: Box<Self>);
}

/// A managed document database keyed by string identifiers.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str)
        -> Result<Option<Document>, DocumentStoreError>;

    /// Merges `fields` into the document, creating it if needed.
    async fn set(&self, collection: &str, id: &str, fields: Fields)
        -> Result<(), DocumentStoreError>;

    /// Merges `fields` into an existing document.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), DocumentStoreError>;

    /// Registers `listener` for `query`. The current result set is delivered right away.
    fn watch(&self, query: Query, listener: SnapshotListener) -> Box<dyn ListenerRegistration>;
}
