// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use image::{DynamicImage, GenericImageView};
use mime::Mime;

use super::ImageOrientation;

// Each stage of the profile image pipeline consumes the buffer of the previous one.

pub struct RawImageBytes(pub Vec<u8>);

pub struct DecodedImage {
    pub pixels: DynamicImage,
    pub orientation: ImageOrientation,
}

pub struct OrientedImage(pub DynamicImage);

pub struct EncodedImage {
    pub data: Vec<u8>,
    pub media_type: Mime,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    pub fn into_oriented(self) -> OrientedImage {
        OrientedImage(self.orientation.apply(self.pixels))
    }
}

impl OrientedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }
}
