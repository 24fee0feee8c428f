//! Error types for icon rendering and export.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering and export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested edge length cannot back a pixmap (zero).
    #[error("invalid icon size: {0}x{0}")]
    InvalidSize(u32),

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered icon could not be encoded or written.
    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The asset catalog manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Generic I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
