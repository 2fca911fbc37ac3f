// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use image_buffers::{DecodedImage, EncodedImage, OrientedImage, RawImageBytes};
pub use image_orientation::ImageOrientation;
pub use image_reference::ImageReference;

mod image_buffers;
mod image_orientation;
mod image_reference;
