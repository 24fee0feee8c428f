//! Batch export settings.

use std::path::{Path, PathBuf};

use crate::colors::BookPalette;
use crate::icon::IconVariant;

/// Settings for one batch export run.
///
/// The default value is the fixed macOS icon set: seven base sizes from
/// 16 to 1024, an @2x variant for every base size up to 512, written to the
/// app's asset catalog.
///
/// # Example
///
/// ```
/// use book_icon_renderer::BatchConfig;
///
/// let config = BatchConfig::default()
///     .with_output_dir("out/AppIcon.appiconset")
///     .with_base_sizes(vec![16, 32]);
///
/// let names: Vec<_> = config.variants().map(|v| v.file_name()).collect();
/// assert_eq!(
///     names,
///     ["icon_16x16.png", "icon_16x16@2x.png", "icon_32x32.png", "icon_32x32@2x.png"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Directory the icons are written to. Created if missing.
    pub output_dir: PathBuf,

    /// Base sizes, rendered in order.
    pub base_sizes: Vec<u32>,

    /// Largest base size that also gets an @2x variant.
    pub max_retina_base: u32,

    /// Colors used for every render.
    pub palette: BookPalette,

    /// Also write the asset catalog `Contents.json`.
    pub write_manifest: bool,
}

impl BatchConfig {
    pub const DEFAULT_OUTPUT_DIR: &'static str = "DigitalGram/Assets.xcassets/AppIcon.appiconset";
    pub const DEFAULT_BASE_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];
    pub const DEFAULT_MAX_RETINA_BASE: u32 = 512;

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Sets the base sizes.
    pub fn with_base_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.base_sizes = sizes;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: BookPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Enables or disables writing `Contents.json`.
    pub fn with_manifest(mut self, enabled: bool) -> Self {
        self.write_manifest = enabled;
        self
    }

    /// Every icon set entry in write order: each base size, followed by its
    /// @2x variant when the base size is small enough.
    pub fn variants(&self) -> impl Iterator<Item = IconVariant> + '_ {
        self.base_sizes.iter().flat_map(move |&size| {
            let retina = (size <= self.max_retina_base).then(|| IconVariant::retina(size));
            std::iter::once(IconVariant::standard(size)).chain(retina)
        })
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(Self::DEFAULT_OUTPUT_DIR),
            base_sizes: Self::DEFAULT_BASE_SIZES.to_vec(),
            max_retina_base: Self::DEFAULT_MAX_RETINA_BASE,
            palette: BookPalette::DEFAULT,
            write_manifest: false,
        }
    }
}
