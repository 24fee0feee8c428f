//! Rasterization of the book icon with tiny-skia.
//!
//! [`IconRenderer`] takes the layout from [`BookGeometry`], paints each layer
//! back to front into a transparent pixmap, and hands back an `RgbaImage`.

use image::{Rgba, RgbaImage};
use log::debug;
use palette::Srgba;
use resvg::tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};

use crate::colors::{BookPalette, opaque};
use crate::error::{Error, Result};
use crate::geometry::{BookGeometry, RectF};
use crate::icon::{IconImage, IconVariant};

/// Control point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

// ============================================================================
// IconRenderer
// ============================================================================

/// Draws the book icon at any square size.
///
/// Rendering is a pure function of the size and the palette: the same
/// inputs always produce the same pixels.
///
/// # Example
///
/// ```
/// use book_icon_renderer::IconRenderer;
///
/// let icon = IconRenderer::new().render(64)?;
/// assert_eq!(icon.dimensions().width, 64);
/// # Ok::<(), book_icon_renderer::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    palette: BookPalette,
}

impl IconRenderer {
    /// Creates a renderer with the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with a custom palette.
    pub fn with_palette(palette: BookPalette) -> Self {
        Self { palette }
    }

    /// Returns the colors this renderer paints with.
    pub fn palette(&self) -> &BookPalette {
        &self.palette
    }

    /// Renders a `size` x `size` standard-resolution icon.
    pub fn render(&self, size: u32) -> Result<IconImage> {
        Ok(IconImage::new(self.rasterize(size)?, 1.0))
    }

    /// Renders an icon set entry at its pixel size, tagged with its scale.
    pub fn render_variant(&self, variant: IconVariant) -> Result<IconImage> {
        let data = self.rasterize(variant.pixel_size()?)?;
        Ok(IconImage::new(data, variant.scale as f32))
    }

    fn rasterize(&self, size: u32) -> Result<RgbaImage> {
        let mut pixmap = Pixmap::new(size, size).ok_or(Error::InvalidSize(size))?;
        let geometry = BookGeometry::for_size(size);
        debug!("Book layout for {size}x{size}: {geometry:?}");

        self.paint(&mut pixmap, &geometry);

        Ok(pixmap_to_rgba_image(&pixmap))
    }

    /// Paints all layers back to front.
    fn paint(&self, pixmap: &mut Pixmap, g: &BookGeometry) {
        let palette = &self.palette;

        fill_rounded_rect(pixmap, g.shadow, g.corner_radius, palette.shadow);
        fill_rounded_rect(pixmap, g.book, g.corner_radius, opaque(palette.body));
        fill_rounded_rect(pixmap, g.spine, g.corner_radius, opaque(palette.spine));

        for page in &g.pages {
            fill_rounded_rect(pixmap, *page, g.page_radius, opaque(palette.page));
        }

        fill_rect(pixmap, g.bookmark, opaque(palette.bookmark));
    }
}

// ============================================================================
// Drawing Primitives
// ============================================================================

fn paint_for(color: Srgba<u8>) -> Paint<'static> {
    let (r, g, b, a) = color.into_components();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Fills a rounded rectangle. Degenerate boxes draw nothing.
fn fill_rounded_rect(pixmap: &mut Pixmap, rect: RectF, radius: f32, color: Srgba<u8>) {
    let Some(path) = rounded_rect_path(rect, radius) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &paint_for(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

/// Fills a plain rectangle. Degenerate boxes draw nothing.
///
/// Goes through the path filler: anti-aliased `Pixmap::fill_rect` asserts
/// on boxes narrower than a pixel, which the bookmark is at small sizes.
fn fill_rect(pixmap: &mut Pixmap, rect: RectF, color: Srgba<u8>) {
    let Some(rect) = Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom) else {
        return;
    };
    pixmap.fill_path(
        &PathBuilder::from_rect(rect),
        &paint_for(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

/// Builds a rectangle path with circular corners.
///
/// The radius is clamped to half the shorter side, so a narrow box becomes
/// a pill rather than a self-intersecting outline.
fn rounded_rect_path(rect: RectF, radius: f32) -> Option<Path> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    let RectF {
        left: l,
        top: t,
        right: rt,
        bottom: b,
    } = rect;

    if r == 0.0 {
        return Rect::from_ltrb(l, t, rt, b).map(PathBuilder::from_rect);
    }

    let k = r * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    pb.close();
    pb.finish()
}

// ============================================================================
// Pixmap Conversion
// ============================================================================

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    // tiny_skia stores premultiplied alpha
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    img
}

// ============================================================================
// Tests
// ============================================================================
