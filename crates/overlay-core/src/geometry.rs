//! Geometry primitives shared by the gesture controllers
//!
//! Document-space values are page-local units at zoom=1. Screen-space values
//! are CSS pixels in the viewer's scroll container.

use serde::{Deserialize, Serialize};

/// Clamp `value` into `[min, max]`, letting `min` win when the range is inverted.
///
/// `f64::clamp` panics on `min > max`, which happens whenever a marker is
/// larger than the room left on its page. The controllers rely on the lower
/// bound winning in that case.
pub fn clamp_min_wins(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// A point in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Movement from `origin` to this point
    pub fn offset_from(self, origin: ScreenPoint) -> ScreenVector {
        ScreenVector {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }

    /// Euclidean distance between two points
    pub fn distance_to(self, other: ScreenPoint) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// A movement in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenVector {
    pub dx: f64,
    pub dy: f64,
}

impl ScreenVector {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Convert to document units at the given zoom.
    ///
    /// A non-positive or non-finite zoom is treated as 1.0.
    pub fn to_document(self, zoom: f64) -> (f64, f64) {
        let zoom = sanitize_zoom(zoom);
        (self.dx / zoom, self.dy / zoom)
    }

    /// Largest absolute component, used for tap detection
    pub fn max_axis(self) -> f64 {
        self.dx.abs().max(self.dy.abs())
    }
}

/// Zoom as read from the host, falling back to 1.0 when unusable
pub fn sanitize_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        1.0
    }
}

/// Width and height in document units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or NaN
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// An axis-aligned rectangle in document units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check the page-bounds invariant against a page of the given size
    pub fn fits_within(&self, page: Size) -> bool {
        const EPSILON: f64 = 1e-9;
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= page.width + EPSILON
            && self.bottom() <= page.height + EPSILON
    }

    /// Move the rectangle inside the page, shrinking it first if it is larger.
    pub fn clamped_to(&self, page: Size) -> Rect {
        let width = self.width.min(page.width).max(0.0);
        let height = self.height.min(page.height).max(0.0);
        Rect {
            x: clamp_min_wins(self.x, 0.0, page.width - width),
            y: clamp_min_wins(self.y, 0.0, page.height - height),
            width,
            height,
        }
    }
}

/// An axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Edge-inclusive containment test
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}
