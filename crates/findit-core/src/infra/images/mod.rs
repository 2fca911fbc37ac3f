// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use fs_image_source::FsImageSource;
pub use image_codec::{decode_image, encode_jpeg, IMAGE_OUTPUT_QUALITY};

mod fs_image_source;
mod image_codec;
