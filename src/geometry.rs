//! Proportional layout of the book icon.
//!
//! Every box is derived from the canvas edge length through a fixed ratio,
//! so the icon is self-similar at every size. Nothing here touches pixels;
//! [`IconRenderer`](crate::IconRenderer) consumes a [`BookGeometry`] and
//! rasterizes it.

/// Margin around the book, relative to the canvas size.
pub const PADDING_RATIO: f32 = 0.15;
/// Shadow displacement along both axes, relative to the canvas size.
pub const SHADOW_OFFSET_RATIO: f32 = 0.02;
/// Corner radius of the body, spine and shadow, relative to the canvas size.
pub const CORNER_RADIUS_RATIO: f32 = 0.08;
/// Spine width, relative to the book width.
pub const SPINE_WIDTH_RATIO: f32 = 0.15;
/// Gap between the pages and the spine/book edges, relative to the canvas size.
pub const PAGE_INSET_RATIO: f32 = 0.03;
/// Per-layer shift of the page stack, relative to the canvas size.
pub const PAGE_STEP_RATIO: f32 = 0.01;
/// Corner radius of each page, relative to the canvas size.
pub const PAGE_RADIUS_RATIO: f32 = 0.05;
/// Bookmark width, relative to the book width.
pub const BOOKMARK_WIDTH_RATIO: f32 = 0.08;
/// Bookmark length, relative to the book height.
pub const BOOKMARK_LENGTH_RATIO: f32 = 0.4;
/// Number of stacked page layers.
pub const PAGE_LAYERS: usize = 3;

/// An axis-aligned rectangle in continuous canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// Returns this rectangle moved by `(dx, dy)`.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::from_ltrb(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Returns true if `(x, y)` lies inside or on the edge.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// The complete layout of the book icon for one canvas size.
///
/// Fields are listed in paint order, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct BookGeometry {
    /// Canvas edge length.
    pub size: f32,
    /// Margin between the canvas edge and the book.
    pub padding: f32,
    /// Drop shadow, the book box shifted down and right.
    pub shadow: RectF,
    /// Book body.
    pub book: RectF,
    /// Corner radius shared by shadow, body and spine.
    pub corner_radius: f32,
    /// Spine over the left part of the body.
    pub spine: RectF,
    /// Page layers; later entries are painted over earlier ones.
    pub pages: [RectF; PAGE_LAYERS],
    /// Corner radius of each page.
    pub page_radius: f32,
    /// Bookmark ribbon hanging from the top edge.
    pub bookmark: RectF,
}

impl BookGeometry {
    /// Computes the layout for a square canvas of `size` pixels.
    pub fn for_size(size: u32) -> Self {
        let size = size as f32;

        let padding = size * PADDING_RATIO;
        let book = RectF::from_ltrb(padding, padding, size - padding, size - padding);

        let shadow_offset = size * SHADOW_OFFSET_RATIO;
        let shadow = book.offset(shadow_offset, shadow_offset);

        let spine_width = book.width() * SPINE_WIDTH_RATIO;
        let spine = RectF::from_ltrb(book.left, book.top, book.left + spine_width, book.bottom);

        let page_inset = size * PAGE_INSET_RATIO;
        let page = RectF::from_ltrb(
            spine.right + page_inset,
            book.top + page_inset,
            book.right - page_inset,
            book.bottom - page_inset,
        );
        // Each layer slides left and drops down; the bottom edge stays put.
        let pages = std::array::from_fn(|i| {
            let step = i as f32 * size * PAGE_STEP_RATIO;
            RectF::from_ltrb(
                page.left - step,
                page.top + step,
                page.right - step,
                page.bottom,
            )
        });

        let bookmark_width = book.width() * BOOKMARK_WIDTH_RATIO;
        let bookmark_left = book.center_x() - bookmark_width / 2.0;
        let bookmark = RectF::from_ltrb(
            bookmark_left,
            book.top,
            bookmark_left + bookmark_width,
            book.top + book.height() * BOOKMARK_LENGTH_RATIO,
        );

        Self {
            size,
            padding,
            shadow,
            book,
            corner_radius: size * CORNER_RADIUS_RATIO,
            spine,
            pages,
            page_radius: size * PAGE_RADIUS_RATIO,
            bookmark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS * b.abs().max(1.0)
    }

    #[test]
    fn book_box_is_padded() {
        let g = BookGeometry::for_size(100);
        assert!(approx(g.padding, 15.0));
        assert!(approx(g.book.left, 15.0));
        assert!(approx(g.book.top, 15.0));
        assert!(approx(g.book.right, 85.0));
        assert!(approx(g.book.bottom, 85.0));
        assert!(approx(g.corner_radius, 8.0));
        assert!(approx(g.page_radius, 5.0));
    }

    #[test]
    fn padding_scales_linearly() {
        let sizes = [16, 32, 64, 128, 256, 512, 1024, 2048];
        let expected = BookGeometry::for_size(16).padding / 16.0;
        for size in sizes {
            let g = BookGeometry::for_size(size);
            assert!(approx(g.padding / size as f32, expected), "size {size}");
            assert!(
                approx(g.spine.width() / size as f32, 0.7 * SPINE_WIDTH_RATIO),
                "size {size}"
            );
        }
    }

    #[test]
    fn shadow_is_offset_book() {
        let g = BookGeometry::for_size(200);
        assert!(approx(g.shadow.left - g.book.left, 4.0));
        assert!(approx(g.shadow.top - g.book.top, 4.0));
        assert!(approx(g.shadow.width(), g.book.width()));
        assert!(approx(g.shadow.height(), g.book.height()));
    }

    #[test]
    fn spine_covers_left_of_book() {
        let g = BookGeometry::for_size(256);
        assert!(approx(g.spine.left, g.book.left));
        assert!(approx(g.spine.width(), g.book.width() * 0.15));
        assert!(approx(g.spine.top, g.book.top));
        assert!(approx(g.spine.bottom, g.book.bottom));
    }

    #[test]
    fn pages_stack_toward_spine() {
        let g = BookGeometry::for_size(100);
        let inset = 3.0;
        let first = g.pages[0];
        assert!(approx(first.left, g.spine.right + inset));
        assert!(approx(first.top, g.book.top + inset));
        assert!(approx(first.right, g.book.right - inset));
        assert!(approx(first.bottom, g.book.bottom - inset));

        for (i, page) in g.pages.iter().enumerate() {
            let step = i as f32;
            assert!(approx(page.left, first.left - step));
            assert!(approx(page.right, first.right - step));
            assert!(approx(page.top, first.top + step));
            assert!(approx(page.bottom, first.bottom));
        }
    }

    #[test]
    fn bookmark_bounds() {
        for size in [16, 100, 1024] {
            let g = BookGeometry::for_size(size);
            assert!(approx(g.bookmark.height(), g.book.height() * 0.4));
            assert!(approx(g.bookmark.width(), g.book.width() * 0.08));
            assert!(approx(g.bookmark.center_x(), g.book.center_x()));
            assert!(approx(g.bookmark.top, g.book.top));
        }
    }

    #[test]
    fn rect_contains_edges() {
        let r = RectF::from_ltrb(1.0, 2.0, 3.0, 4.0);
        assert!(r.contains(1.0, 2.0));
        assert!(r.contains(2.0, 3.0));
        assert!(!r.contains(3.5, 3.0));
    }
}
