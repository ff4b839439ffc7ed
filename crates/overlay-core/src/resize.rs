//! Corner-handle resize
//!
//! Each corner is described by an [`EdgeDelta`] row: which way the pointer
//! delta grows the marker, and whether the near edge moves (so the position
//! shifts) or stays put. All deltas are taken against the gesture-start
//! snapshot, never against the previous tentative rectangle.

use crate::config::SizeLimits;
use crate::geometry::{clamp_min_wins, Rect, ScreenVector, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "se")]
    SouthEast,
}

/// How a pointer delta on one corner maps onto the marker's edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDelta {
    /// +1 when moving right grows the width, -1 when it shrinks it
    pub width_sign: i8,
    /// +1 when moving down grows the height, -1 when it shrinks it
    pub height_sign: i8,
    /// Left edge moves, so x shifts by `old_width - new_width`
    pub shifts_x: bool,
    /// Top edge moves, so y shifts by `old_height - new_height`
    pub shifts_y: bool,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthWest,
        Corner::SouthEast,
    ];

    pub const fn edges(self) -> EdgeDelta {
        match self {
            Corner::SouthEast => EdgeDelta {
                width_sign: 1,
                height_sign: 1,
                shifts_x: false,
                shifts_y: false,
            },
            Corner::SouthWest => EdgeDelta {
                width_sign: -1,
                height_sign: 1,
                shifts_x: true,
                shifts_y: false,
            },
            Corner::NorthEast => EdgeDelta {
                width_sign: 1,
                height_sign: -1,
                shifts_x: false,
                shifts_y: true,
            },
            Corner::NorthWest => EdgeDelta {
                width_sign: -1,
                height_sign: -1,
                shifts_x: true,
                shifts_y: true,
            },
        }
    }

    /// The diagonally opposite corner, which stays fixed during a resize
    pub const fn opposite(self) -> Corner {
        match self {
            Corner::NorthWest => Corner::SouthEast,
            Corner::NorthEast => Corner::SouthWest,
            Corner::SouthWest => Corner::NorthEast,
            Corner::SouthEast => Corner::NorthWest,
        }
    }

    /// Position of this corner on a rectangle
    pub fn point_of(self, rect: Rect) -> (f64, f64) {
        let edges = self.edges();
        let x = if edges.shifts_x { rect.x } else { rect.right() };
        let y = if edges.shifts_y { rect.y } else { rect.bottom() };
        (x, y)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::NorthWest => "nw",
            Corner::NorthEast => "ne",
            Corner::SouthWest => "sw",
            Corner::SouthEast => "se",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nw" => Ok(Corner::NorthWest),
            "ne" => Ok(Corner::NorthEast),
            "sw" => Ok(Corner::SouthWest),
            "se" => Ok(Corner::SouthEast),
            other => Err(format!("Unknown corner: {}", other)),
        }
    }
}

/// Resize `start` by a document-space delta on `corner`.
///
/// The moving edges stop at the page border, so the opposite corner never
/// moves as long as `start` is on `page` and leaves room for the minimum
/// size. Otherwise the result is moved onto the page at no less than the
/// minimum.
pub fn resize_rect(
    corner: Corner,
    start: Rect,
    (dx, dy): (f64, f64),
    limits: SizeLimits,
    page: Size,
) -> Rect {
    let edges = corner.edges();
    // The live page may have shrunk since the gesture started
    let start = start.clamped_to(page);

    // Room between the anchored edge and the page border the moving edge heads for
    let room_w = if edges.shifts_x {
        start.right()
    } else {
        page.width - start.x
    };
    let room_h = if edges.shifts_y {
        start.bottom()
    } else {
        page.height - start.y
    };

    let raw = Size::new(
        start.width + f64::from(edges.width_sign) * dx,
        start.height + f64::from(edges.height_sign) * dy,
    );
    let clamped = limits.clamp(raw);
    let width = clamped
        .width
        .min(room_w.max(0.0))
        .max(limits.min.width)
        .min(page.width.max(0.0));
    let height = clamped
        .height
        .min(room_h.max(0.0))
        .max(limits.min.height)
        .min(page.height.max(0.0));

    let x = if edges.shifts_x {
        start.x + (start.width - width)
    } else {
        start.x
    };
    let y = if edges.shifts_y {
        start.y + (start.height - height)
    } else {
        start.y
    };

    // Too little room for the minimum: the marker slides instead of shrinking
    let x = clamp_min_wins(x, 0.0, page.width - width);
    let y = clamp_min_wins(y, 0.0, page.height - height);

    Rect::new(x, y, width, height)
}

#[derive(Debug, Clone)]
pub struct CornerResizeController {
    corner: Corner,
    start: Rect,
    last_movement: Option<ScreenVector>,
    tentative: Option<Rect>,
}

impl CornerResizeController {
    /// Start a resize from the committed rectangle (not a live tentative one)
    pub fn new(corner: Corner, start: Rect) -> Self {
        Self {
            corner,
            start,
            last_movement: None,
            tentative: None,
        }
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn start(&self) -> Rect {
        self.start
    }

    pub fn tentative(&self) -> Option<Rect> {
        self.tentative
    }

    /// Feed the pointer movement since the handle was grabbed
    pub fn update(
        &mut self,
        movement: ScreenVector,
        zoom: f64,
        limits: SizeLimits,
        page: Size,
    ) -> Rect {
        self.last_movement = Some(movement);
        let rect = resize_rect(
            self.corner,
            self.start,
            movement.to_document(zoom),
            limits,
            page,
        );
        self.tentative = Some(rect);
        rect
    }

    /// Final rectangle against live zoom and page, `None` if the handle never moved
    pub fn release(&self, zoom: f64, limits: SizeLimits, page: Size) -> Option<Rect> {
        let movement = self.last_movement?;
        Some(resize_rect(
            self.corner,
            self.start,
            movement.to_document(zoom),
            limits,
            page,
        ))
    }
}
