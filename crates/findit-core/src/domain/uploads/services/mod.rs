// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use blob_storage::BlobStorage;

mod blob_storage;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::blob_storage::MockBlobStorage;
}
