// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::io::Cursor;

use anyhow::format_err;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::domain::images::models::{
    DecodedImage, EncodedImage, ImageOrientation, OrientedImage, RawImageBytes,
};
use crate::domain::shared::models::Failure;

/// JPEG quality (0-100) every profile image is re-encoded with.
pub const IMAGE_OUTPUT_QUALITY: u8 = 80;

/// Decodes `bytes` and reads the EXIF orientation tag along the way.
pub fn decode_image(bytes: RawImageBytes) -> Result<DecodedImage, Failure> {
    let reader = ImageReader::new(Cursor::new(bytes.0.as_slice()))
        .with_guessed_format()
        .map_err(|err| Failure::Decode(err.into()))?;

    if reader.format().is_none() {
        return Err(Failure::Decode(format_err!("Unrecognized image format.")));
    }

    let mut decoder = reader
        .into_decoder()
        .map_err(|err| Failure::Decode(err.into()))?;
    let orientation = decoder
        .orientation()
        .map(ImageOrientation::from)
        .unwrap_or_default();
    let pixels = DynamicImage::from_decoder(decoder).map_err(|err| Failure::Decode(err.into()))?;

    Ok(DecodedImage {
        pixels,
        orientation,
    })
}

pub fn encode_jpeg(image: OrientedImage, quality: u8) -> Result<EncodedImage, Failure> {
    let (width, height) = image.dimensions();
    let mut data = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut data, quality);

    // JPEG can't store alpha or 16-bit channels, so we always hand it rgb8.
    image
        .0
        .into_rgb8()
        .write_with_encoder(encoder)
        .map_err(|err| Failure::Encode(err.into()))?;

    Ok(EncodedImage {
        data,
        media_type: mime::IMAGE_JPEG,
        width,
        height,
    })
}
