//! Page geometry supplied by the host document viewer
//!
//! The engine never caches anything read through [`PageGeometry`]: zoom,
//! scroll and page rectangles can change between any two pointer events.

use crate::geometry::{sanitize_zoom, ScreenRect, Size};
use serde::{Deserialize, Serialize};

/// Scroll position of the viewer, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl ScrollOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn vertical(y: f64) -> Self {
        Self { x: 0.0, y }
    }
}

/// Read-only view of the rendered document
pub trait PageGeometry {
    /// Number of pages, fixed for the document's lifetime
    fn page_count(&self) -> usize;

    /// Size of a page at zoom=1, `None` if the page has not been measured
    fn page_size(&self, index: usize) -> Option<Size>;

    /// Current zoom factor
    fn zoom(&self) -> f64;

    /// Current scroll offset of the viewer
    fn scroll_offset(&self) -> ScrollOffset;

    /// Live bounding box of a rendered page relative to the viewer's visible
    /// area, `None` if the page is not mounted
    fn page_bounds(&self, index: usize) -> Option<ScreenRect>;
}

/// Absolute (scroll-independent) screen rectangle of a page.
///
/// Position comes from the rendered bounding box plus the scroll offset; the
/// extent comes from the zoom=1 page size times zoom. Returns `None` when the
/// page is unmounted or has a zero/negative size.
pub fn absolute_page_rect(geometry: &dyn PageGeometry, index: usize) -> Option<ScreenRect> {
    let size = geometry.page_size(index).filter(|s| !s.is_degenerate())?;
    let bounds = geometry.page_bounds(index)?;
    let zoom = sanitize_zoom(geometry.zoom());
    let scroll = geometry.scroll_offset();
    Some(ScreenRect::new(
        bounds.left + scroll.x,
        bounds.top + scroll.y,
        size.width * zoom,
        size.height * zoom,
    ))
}

/// Pages stacked vertically in a single scroll column.
///
/// A self-contained [`PageGeometry`] for hosts that do not measure rendered
/// pages themselves, and for replaying recorded gestures. Hosts that do
/// measure (centered pages of different widths, side-by-side spreads) record
/// the rendered boxes with [`set_measured_bounds`](Self::set_measured_bounds),
/// and those pages use the measured position instead of the stacked one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedLayout {
    pub pages: Vec<Size>,
    /// Vertical gap between pages, in screen pixels
    #[serde(default)]
    pub gap: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub scroll: ScrollOffset,
    /// Measured page boxes in absolute screen space, indexed like `pages`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub page_rects: Vec<ScreenRect>,
}

fn default_zoom() -> f64 {
    1.0
}

impl StackedLayout {
    pub fn new(pages: Vec<Size>) -> Self {
        Self {
            pages,
            gap: 0.0,
            zoom: 1.0,
            scroll: ScrollOffset::default(),
            page_rects: Vec::new(),
        }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    pub fn scroll_to(&mut self, scroll: ScrollOffset) {
        self.scroll = scroll;
    }

    /// Record rendered page boxes, measured relative to the viewport at the
    /// current scroll offset. An empty list goes back to the stacked column.
    ///
    /// Scrolling afterwards keeps them valid; a zoom change needs a fresh
    /// measurement.
    pub fn set_measured_bounds(&mut self, bounds: Vec<ScreenRect>) {
        let scroll = self.scroll;
        self.page_rects = bounds
            .into_iter()
            .map(|b| ScreenRect::new(b.left + scroll.x, b.top + scroll.y, b.width, b.height))
            .collect();
    }

    /// Top edge of a page in absolute screen space
    fn page_top(&self, index: usize) -> f64 {
        let zoom = sanitize_zoom(self.zoom);
        self.pages
            .iter()
            .take(index)
            .map(|p| p.height * zoom + self.gap)
            .sum()
    }
}

impl PageGeometry for StackedLayout {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_size(&self, index: usize) -> Option<Size> {
        self.pages.get(index).copied()
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    fn page_bounds(&self, index: usize) -> Option<ScreenRect> {
        let size = self.pages.get(index)?;
        if let Some(measured) = self.page_rects.get(index) {
            return Some(ScreenRect::new(
                measured.left - self.scroll.x,
                measured.top - self.scroll.y,
                measured.width,
                measured.height,
            ));
        }
        let zoom = sanitize_zoom(self.zoom);
        Some(ScreenRect::new(
            -self.scroll.x,
            self.page_top(index) - self.scroll.y,
            size.width * zoom,
            size.height * zoom,
        ))
    }
}
