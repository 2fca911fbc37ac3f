// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use image_source::ImageSource;

mod image_source;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::image_source::MockImageSource;
}
