// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::{dtos, services};
pub use client::{Client, ClientInner};
pub use client_builder::{
    ClientBuilder, UndefinedAuthService, UndefinedBlobStorage, UndefinedDocumentStore,
};
pub use domain::account::services::AuthService;
pub use domain::general::services::{IDProvider, TimeProvider};
pub use domain::images::services::ImageSource;
pub use domain::settings::repos::LanguageRepository;
pub use domain::uploads::services::BlobStorage;
pub use infra::documents::{
    Direction, Document, DocumentStore, DocumentStoreError, Fields, Filter, InMemoryDocumentStore,
    ListenerRegistration, Query, SnapshotListener,
};
pub use infra::images::FsImageSource;
pub use infra::settings::InMemoryLanguageRepository;
pub use infra::uploads::{InMemoryBlobStorage, StoredBlob};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;
