//! Cross-page migration after a drag
//!
//! Pages are scanned top-to-bottom in absolute screen space (rendered
//! position plus scroll offset, extent from page size times zoom). The first
//! page containing the marker's center wins.

use crate::geometry::{sanitize_zoom, Rect, ScreenPoint, ScreenRect};
use crate::page::{absolute_page_rect, PageGeometry};
use tracing::{trace, warn};

/// Where a dragged marker's center landed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    /// Still over the marker's own page
    SamePage,
    /// Over another page; `rect` is local to that page and clamped into it
    OtherPage { page: usize, rect: Rect },
    /// Over no page at all (gutter, or outside the rendered document)
    Outside,
}

pub struct PageLocator<'a> {
    geometry: &'a dyn PageGeometry,
}

impl<'a> PageLocator<'a> {
    pub fn new(geometry: &'a dyn PageGeometry) -> Self {
        Self { geometry }
    }

    /// Absolute screen rectangle of a marker placed on `page`
    pub fn marker_screen_rect(&self, page: usize, rect: Rect) -> Option<ScreenRect> {
        let page_rect = absolute_page_rect(self.geometry, page)?;
        let zoom = sanitize_zoom(self.geometry.zoom());
        Some(ScreenRect::new(
            page_rect.left + rect.x * zoom,
            page_rect.top + rect.y * zoom,
            rect.width * zoom,
            rect.height * zoom,
        ))
    }

    /// First page, top to bottom, whose rectangle contains `point`.
    /// Pages without usable geometry are skipped.
    pub fn page_at(&self, point: ScreenPoint) -> Option<(usize, ScreenRect)> {
        (0..self.geometry.page_count()).find_map(|index| {
            let Some(page_rect) = absolute_page_rect(self.geometry, index) else {
                trace!(page = index, "skipping page without geometry");
                return None;
            };
            page_rect.contains(point).then_some((index, page_rect))
        })
    }

    /// Decide which page a marker dragged to `free` (local to `current_page`,
    /// unclamped) belongs to.
    pub fn locate(&self, current_page: usize, free: Rect) -> Location {
        let Some(marker) = self.marker_screen_rect(current_page, free) else {
            warn!(
                page = current_page,
                "current page has no geometry, keeping marker in place"
            );
            return Location::Outside;
        };

        match self.page_at(marker.center()) {
            None => Location::Outside,
            Some((page, _)) if page == current_page => Location::SamePage,
            Some((page, page_rect)) => {
                let zoom = sanitize_zoom(self.geometry.zoom());
                let local = Rect {
                    x: (marker.left - page_rect.left) / zoom,
                    y: (marker.top - page_rect.top) / zoom,
                    ..free
                };
                // page_at only returns pages with a non-degenerate size
                let page_size = self.geometry.page_size(page).unwrap_or_default();
                Location::OtherPage {
                    page,
                    rect: local.clamped_to(page_size),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::page::{ScrollOffset, StackedLayout};
    use pretty_assertions::assert_eq;

    fn two_pages() -> StackedLayout {
        StackedLayout::new(vec![Size::new(800.0, 1000.0), Size::new(800.0, 1000.0)])
    }

    #[test]
    fn test_center_crossing_into_next_page() {
        let mut layout = two_pages();
        layout.scroll_to(ScrollOffset::vertical(1000.0));
        let locator = PageLocator::new(&layout);

        let free = Rect::new(100.0, 1000.0, 150.0, 80.0);
        assert_eq!(
            locator.locate(0, free),
            Location::OtherPage {
                page: 1,
                rect: Rect::new(100.0, 0.0, 150.0, 80.0)
            }
        );
    }

    #[test]
    fn test_center_on_same_page() {
        let layout = two_pages();
        let locator = PageLocator::new(&layout);
        // Bottom edge past the page, center still on it
        let free = Rect::new(100.0, 950.0, 150.0, 80.0);
        assert_eq!(locator.locate(0, free), Location::SamePage);
    }

    #[test]
    fn test_migration_back_up_a_page() {
        let layout = two_pages().with_gap(20.0);
        let locator = PageLocator::new(&layout);
        let free = Rect::new(10.0, -200.0, 100.0, 50.0);
        assert_eq!(
            locator.locate(1, free),
            Location::OtherPage {
                page: 0,
                rect: Rect::new(10.0, 820.0, 100.0, 50.0)
            }
        );
    }

    #[test]
    fn test_gutter_is_outside() {
        let layout = two_pages().with_gap(100.0);
        let locator = PageLocator::new(&layout);
        // Center at y = 1050, inside the 100px gap
        let free = Rect::new(100.0, 1010.0, 100.0, 80.0);
        assert_eq!(locator.locate(0, free), Location::Outside);
    }

    #[test]
    fn test_zoomed_migration_converts_to_page_units() {
        let mut layout = two_pages();
        layout.set_zoom(2.0);
        let locator = PageLocator::new(&layout);
        let free = Rect::new(50.0, 1100.0, 100.0, 50.0);
        assert_eq!(
            locator.locate(0, free),
            Location::OtherPage {
                page: 1,
                rect: Rect::new(50.0, 100.0, 100.0, 50.0)
            }
        );
    }

    #[test]
    fn test_narrower_target_page_clamps_position() {
        let layout = StackedLayout::new(vec![Size::new(800.0, 1000.0), Size::new(400.0, 600.0)]);
        let locator = PageLocator::new(&layout);
        let free = Rect::new(300.0, 1000.0, 150.0, 80.0);
        assert_eq!(
            locator.locate(0, free),
            Location::OtherPage {
                page: 1,
                rect: Rect::new(250.0, 0.0, 150.0, 80.0)
            }
        );
    }

    #[test]
    fn test_zero_size_page_is_skipped() {
        let layout = StackedLayout::new(vec![
            Size::new(800.0, 1000.0),
            Size::new(0.0, 0.0),
            Size::new(800.0, 1000.0),
        ]);
        let locator = PageLocator::new(&layout);
        let free = Rect::new(100.0, 1010.0, 100.0, 50.0);
        match locator.locate(0, free) {
            Location::OtherPage { page, .. } => assert_eq!(page, 2),
            other => panic!("expected migration, got {:?}", other),
        }
    }
}
