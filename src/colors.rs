//! Color palette for the book icon.

use palette::{Alpha, Srgb, Srgba, WithAlpha};

/// Fill colors for each layer of the book icon.
///
/// The solid layers are opaque; only the drop shadow carries alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookPalette {
    /// Book body (SF blue).
    pub body: Srgb<u8>,
    /// Spine along the left edge, a darker blue.
    pub spine: Srgb<u8>,
    /// Page stack.
    pub page: Srgb<u8>,
    /// Bookmark ribbon (SF orange).
    pub bookmark: Srgb<u8>,
    /// Drop shadow behind the body.
    pub shadow: Srgba<u8>,
}

impl BookPalette {
    pub const DEFAULT: Self = Self {
        body: Srgb::new(52, 120, 246),
        spine: Srgb::new(40, 100, 220),
        page: Srgb::new(245, 245, 250),
        bookmark: Srgb::new(255, 149, 0),
        shadow: Alpha {
            color: Srgb::new(0, 0, 0),
            alpha: 60,
        },
    };
}

impl Default for BookPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Lifts an opaque palette color to RGBA.
pub(crate) fn opaque(color: Srgb<u8>) -> Srgba<u8> {
    color.with_alpha(u8::MAX)
}
