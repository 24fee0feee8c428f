//! Batch export of the full icon set.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::icon::IconVariant;
use crate::manifest::AssetManifest;
use crate::renderer::IconRenderer;

// ============================================================================
// GenerationReport
// ============================================================================

/// A single file written by a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub variant: IconVariant,
    pub path: PathBuf,
}

/// Summary of a completed batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Directory the icons were written to.
    pub output_dir: PathBuf,
    /// Icons in write order.
    pub icons: Vec<WrittenIcon>,
    /// Path of `Contents.json`, if one was written.
    pub manifest: Option<PathBuf>,
}

impl GenerationReport {
    fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            icons: Vec::new(),
            manifest: None,
        }
    }

    /// Returns the number of icons written.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if no icons were written.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Returns the variants written, in order.
    pub fn variants(&self) -> impl Iterator<Item = IconVariant> + '_ {
        self.icons.iter().map(|icon| icon.variant)
    }
}

// ============================================================================
// BatchGenerator
// ============================================================================

/// Renders every icon set entry and writes it to disk.
///
/// Runs strictly in sequence: each image is rendered, saved and dropped
/// before the next one. The first failure stops the run; files written
/// before it are left in place.
///
/// # Example
///
/// ```no_run
/// use book_icon_renderer::{BatchConfig, BatchGenerator};
///
/// let report = BatchGenerator::new(BatchConfig::default()).generate_all()?;
/// assert_eq!(report.len(), 13);
/// # Ok::<(), book_icon_renderer::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BatchGenerator {
    config: BatchConfig,
    renderer: IconRenderer,
}

impl BatchGenerator {
    /// Creates a generator for the given settings.
    pub fn new(config: BatchConfig) -> Self {
        let renderer = IconRenderer::with_palette(config.palette);
        Self { config, renderer }
    }

    /// Returns the settings this generator runs with.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Renders and writes the whole icon set.
    pub fn generate_all(&self) -> Result<GenerationReport> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| Error::CreateDir {
            path: output_dir.clone(),
            source,
        })?;

        let mut report = GenerationReport::new(output_dir.clone());
        for variant in self.config.variants() {
            let path = self.generate_one(variant, output_dir)?;
            report.icons.push(WrittenIcon { variant, path });
        }

        if self.config.write_manifest {
            let manifest = AssetManifest::from_variants(report.variants());
            let path = manifest.write_to(output_dir)?;
            info!("Wrote asset catalog manifest {}", path.display());
            report.manifest = Some(path);
        }

        info!("Icon generation complete!");
        info!("Icons saved to: {}", output_dir.display());

        Ok(report)
    }

    fn generate_one(&self, variant: IconVariant, output_dir: &Path) -> Result<PathBuf> {
        let size = variant.size_label();
        if variant.is_retina() {
            let pixels = variant.pixel_size()?;
            info!(
                "Generating {size}@{} ({pixels}x{pixels}) icon...",
                variant.scale_label()
            );
        } else {
            info!("Generating {size} icon...");
        }

        let icon = self.renderer.render_variant(variant)?;
        let path = output_dir.join(variant.file_name());
        icon.save_png(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_small_set() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("AppIcon.appiconset");
        let config = BatchConfig::default()
            .with_output_dir(&out)
            .with_base_sizes(vec![16, 32]);

        let report = BatchGenerator::new(config).generate_all().unwrap();

        assert_eq!(report.output_dir, out);
        assert_eq!(report.len(), 4);
        assert!(report.manifest.is_none());
        for icon in &report.icons {
            assert!(icon.path.is_file(), "missing {}", icon.path.display());
            let (w, h) = image::image_dimensions(&icon.path).unwrap();
            let pixels = icon.variant.pixel_size().unwrap();
            assert_eq!((w, h), (pixels, pixels));
        }
    }

    #[test]
    fn generator_keeps_config_and_palette() {
        let palette = crate::BookPalette {
            page: palette::Srgb::new(250, 240, 220),
            ..crate::BookPalette::DEFAULT
        };
        let config = BatchConfig::default()
            .with_base_sizes(vec![64])
            .with_palette(palette);
        let generator = BatchGenerator::new(config.clone());

        assert_eq!(generator.config(), &config);
        assert_eq!(generator.renderer.palette(), &palette);
    }

    #[test]
    fn oversized_retina_variant_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let generator = BatchGenerator::new(BatchConfig::default().with_output_dir(dir.path()));
        let variant = IconVariant::retina(u32::MAX / 2 + 1);

        let err = generator.generate_one(variant, dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidSize(size) if size == variant.base_size));
        assert!(!dir.path().join(variant.file_name()).exists());
    }

    #[test]
    fn existing_directory_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::default()
            .with_output_dir(dir.path())
            .with_base_sizes(vec![8]);
        let generator = BatchGenerator::new(config);

        generator.generate_all().unwrap();
        let report = generator.generate_all().unwrap();
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn manifest_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::default()
            .with_output_dir(dir.path())
            .with_base_sizes(vec![16, 1024])
            .with_manifest(true);

        let report = BatchGenerator::new(config).generate_all().unwrap();
        let path = report.manifest.clone().unwrap();
        let manifest =
            AssetManifest::from_json(&std::fs::read_to_string(path).unwrap()).unwrap();

        let names: Vec<_> = manifest.images.iter().map(|i| i.filename.as_str()).collect();
        assert_eq!(names, ["icon_16x16.png", "icon_16x16@2x.png", "icon_1024x1024.png"]);
    }

    #[test]
    fn unwritable_output_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"").unwrap();

        let config = BatchConfig::default().with_output_dir(blocker.join("icons"));
        let err = BatchGenerator::new(config).generate_all().unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
    }

    #[test]
    fn zero_size_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::default()
            .with_output_dir(dir.path())
            .with_base_sizes(vec![16, 0, 32]);

        let err = BatchGenerator::new(config).generate_all().unwrap_err();
        assert!(matches!(err, Error::InvalidSize(0)));

        // Files written before the failure stay; nothing after it is written.
        assert!(dir.path().join("icon_16x16.png").is_file());
        assert!(dir.path().join("icon_16x16@2x.png").is_file());
        assert!(!dir.path().join("icon_32x32.png").exists());
    }
}
