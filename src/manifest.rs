//! Asset catalog manifest (`Contents.json`) for an exported icon set.
//!
//! Xcode reads the images of an `.appiconset` directory through this file:
//!
//! ```json
//! {
//!   "images": [
//!     { "filename": "icon_16x16.png", "idiom": "mac", "scale": "1x", "size": "16x16" },
//!     { "filename": "icon_16x16@2x.png", "idiom": "mac", "scale": "2x", "size": "16x16" }
//!   ],
//!   "info": { "author": "xcode", "version": 1 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::icon::IconVariant;

/// One image entry of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

impl From<IconVariant> for ManifestImage {
    fn from(variant: IconVariant) -> Self {
        Self {
            filename: variant.file_name(),
            idiom: AssetManifest::IDIOM.to_string(),
            scale: variant.scale_label(),
            size: variant.size_label(),
        }
    }
}

/// Catalog metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// The `Contents.json` of an icon set directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AssetManifest {
    pub images: Vec<ManifestImage>,
    #[serde(default)]
    pub info: ManifestInfo,
}

impl AssetManifest {
    pub const FILE_NAME: &'static str = "Contents.json";
    pub const IDIOM: &'static str = "mac";

    /// Builds a manifest listing `variants` in order.
    pub fn from_variants(variants: impl IntoIterator<Item = IconVariant>) -> Self {
        Self {
            images: variants.into_iter().map(ManifestImage::from).collect(),
            info: ManifestInfo::default(),
        }
    }

    /// Serializes the manifest to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a manifest from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Writes `Contents.json` into `dir` and returns its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(Self::FILE_NAME);
        fs::write(&path, self.to_json_pretty()?)?;
        Ok(path)
    }
}
