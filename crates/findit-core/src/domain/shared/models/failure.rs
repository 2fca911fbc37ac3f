// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use thiserror::Error;

/// The failure kinds surfaced by the chat streams, the profile image pipeline and the
/// profile coordinator. Each one ends its operation; nothing is retried.
#[derive(Error, Debug)]
pub enum Failure {
    #[error("Failed to read image. {0}")]
    IO(anyhow::Error),

    #[error("Failed to decode image. {0}")]
    Decode(anyhow::Error),

    #[error("Failed to compress image. {0}")]
    Encode(anyhow::Error),

    #[error("Failed to upload image. {0}")]
    Upload(anyhow::Error),

    #[error("Failed to load profile. {0}")]
    Load(anyhow::Error),

    #[error("Failed to save profile. {0}")]
    Persist(anyhow::Error),

    #[error("Failed to send message. {0}")]
    Delivery(anyhow::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Live query failed. {0}")]
    Watch(anyhow::Error),

    #[error("No user is signed in.")]
    NotSignedIn,
}
