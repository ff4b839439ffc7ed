//! Screen-space boxes for drawing a marker
//!
//! Boxes are relative to the rendered page's top-left corner, in screen
//! pixels at the given zoom.

use crate::geometry::{sanitize_zoom, Rect, ScreenRect};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayFrame {
    /// The marker itself
    pub content: ScreenRect,
    /// The grab area: content padded on every side
    pub hit_area: ScreenRect,
    /// True while a gesture is in flight (draw above other markers)
    pub active: bool,
    /// True when corner handles should be shown
    pub selected: bool,
}

impl DisplayFrame {
    pub fn new(rect: Rect, zoom: f64, padding: f64, active: bool, selected: bool) -> Self {
        let zoom = sanitize_zoom(zoom);
        Self {
            content: ScreenRect::new(
                rect.x * zoom,
                rect.y * zoom,
                rect.width * zoom,
                rect.height * zoom,
            ),
            hit_area: ScreenRect::new(
                (rect.x - padding) * zoom,
                (rect.y - padding) * zoom,
                (rect.width + 2.0 * padding) * zoom,
                (rect.height + 2.0 * padding) * zoom,
            ),
            active,
            selected,
        }
    }
}
