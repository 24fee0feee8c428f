//! book-icon-renderer: procedural app icon for DigitalGram
//!
//! This crate draws the app's book icon (drop shadow, blue cover, darker
//! spine, stacked pages and an orange bookmark ribbon) at any square size and
//! exports the macOS `AppIcon.appiconset` image set.
//!
//! # Example
//!
//! ```
//! use book_icon_renderer::{BookGeometry, IconRenderer};
//!
//! // Layout is plain data, computed without touching pixels
//! let geometry = BookGeometry::for_size(128);
//! assert_eq!(geometry.padding, 128.0 * 0.15);
//!
//! // Rendering is a pure function of the size
//! let icon = IconRenderer::new().render(128)?;
//! assert_eq!(icon.dimensions().width, 128);
//! # Ok::<(), book_icon_renderer::Error>(())
//! ```
//!
//! # Batch Export
//!
//! [`BatchGenerator`] walks the sizes in a [`BatchConfig`] and writes one
//! PNG per icon set entry:
//!
//! ```no_run
//! use book_icon_renderer::{BatchConfig, BatchGenerator};
//!
//! let config = BatchConfig::default().with_output_dir("out/AppIcon.appiconset");
//! let report = BatchGenerator::new(config).generate_all()?;
//! println!("wrote {} icons", report.len());
//! # Ok::<(), book_icon_renderer::Error>(())
//! ```

mod colors;
mod config;
mod error;
mod generator;
mod geometry;
mod icon;
mod manifest;
mod renderer;

pub use colors::BookPalette;
pub use config::BatchConfig;
pub use error::{Error, Result};
pub use generator::{BatchGenerator, GenerationReport, WrittenIcon};
pub use geometry::{BookGeometry, PAGE_LAYERS, RectF};
pub use icon::{IconImage, IconVariant, SizePx};
pub use manifest::{AssetManifest, ManifestImage, ManifestInfo};
pub use renderer::IconRenderer;
