//! Icon types for rendered output.
//!
//! An [`IconImage`] is a single rendered raster together with its display
//! scale. An [`IconVariant`] names one entry of the exported icon set: a base
//! size and a scale, from which the pixel size and the file name follow.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A single rendered icon image.
///
/// macOS icon sets pair every base size with an @2x variant rendered at
/// twice the pixel dimensions. The scale records which one this is.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,

    /// The display scale factor.
    ///
    /// - 1.0 for standard resolution (@1x)
    /// - 2.0 for retina/HiDPI (@2x)
    ///
    /// The "logical" size of the icon is `dimensions / scale`.
    pub scale: f32,
}

impl IconImage {
    /// Creates a new icon image with the given data and scale.
    pub fn new(data: RgbaImage, scale: f32) -> Self {
        Self { data, scale }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns the logical size of the icon (dimensions / scale).
    ///
    /// For a 64x64 @2x icon, the logical size is 32x32.
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.data.width() as f32 / self.scale,
            self.data.height() as f32 / self.scale,
        )
    }

    /// Encodes the image as PNG and writes it to `path`.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.data
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| Error::Save {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// One entry of an exported icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconVariant {
    /// The nominal edge length, used in the file name.
    pub base_size: u32,
    /// Integer display scale (1 or 2).
    pub scale: u32,
}

impl IconVariant {
    /// The standard-resolution variant of `base_size`.
    pub fn standard(base_size: u32) -> Self {
        Self {
            base_size,
            scale: 1,
        }
    }

    /// The @2x variant of `base_size`.
    pub fn retina(base_size: u32) -> Self {
        Self {
            base_size,
            scale: 2,
        }
    }

    /// Returns true for @2x and higher variants.
    pub fn is_retina(&self) -> bool {
        self.scale > 1
    }

    /// Edge length of the rendered image in pixels.
    ///
    /// Fails with [`Error::InvalidSize`] when the product does not fit in `u32`.
    pub fn pixel_size(&self) -> Result<u32> {
        self.base_size
            .checked_mul(self.scale)
            .ok_or(Error::InvalidSize(self.base_size))
    }

    /// Scale label as used in file names and asset catalogs ("1x", "2x").
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }

    /// Logical size label ("16x16").
    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.base_size)
    }

    /// File name for this variant.
    ///
    /// The @2x name carries the base size, not the rendered pixel size:
    /// `icon_16x16@2x.png` holds a 32x32 image.
    pub fn file_name(&self) -> String {
        if self.is_retina() {
            format!("icon_{}@{}.png", self.size_label(), self.scale_label())
        } else {
            format!("icon_{}.png", self.size_label())
        }
    }
}
