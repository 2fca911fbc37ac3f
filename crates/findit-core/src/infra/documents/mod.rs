// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use document::{to_fields, Document, Fields};
pub use document_store::{
    DocumentStore, DocumentStoreError, DynDocumentStore, ListenerRegistration, SnapshotListener,
};
pub use in_memory_document_store::InMemoryDocumentStore;
pub use query::{Direction, Filter, Query};

mod document;
mod document_store;
mod in_memory_document_store;
pub mod keys;
mod query;
