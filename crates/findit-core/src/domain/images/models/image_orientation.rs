// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use image::metadata::Orientation;
use image::DynamicImage;

/// The clockwise rotation needed to display an image upright, as stored in its EXIF
/// orientation tag. Mirrored, unknown and missing tags count as `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageOrientation {
    #[default]
    Normal,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl ImageOrientation {
    pub fn degrees(&self) -> u32 {
        match self {
            ImageOrientation::Normal => 0,
            ImageOrientation::Rotate90 => 90,
            ImageOrientation::Rotate180 => 180,
            ImageOrientation::Rotate270 => 270,
        }
    }

    pub fn apply(&self, image: DynamicImage) -> DynamicImage {
        match self {
            ImageOrientation::Normal => image,
            ImageOrientation::Rotate90 => image.rotate90(),
            ImageOrientation::Rotate180 => image.rotate180(),
            ImageOrientation::Rotate270 => image.rotate270(),
        }
    }
}

impl From<Orientation> for ImageOrientation {
    fn from(value: Orientation) -> Self {
        match value {
            Orientation::Rotate90 => ImageOrientation::Rotate90,
            Orientation::Rotate180 => ImageOrientation::Rotate180,
            Orientation::Rotate270 => ImageOrientation::Rotate270,
            Orientation::NoTransforms
            | Orientation::FlipHorizontal
            | Orientation::FlipVertical
            | Orientation::Rotate90FlipH
            | Orientation::Rotate270FlipH => ImageOrientation::Normal,
        }
    }
}
