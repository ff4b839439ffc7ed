//! Single-pointer drag
//!
//! Movement is always measured from the gesture-start pointer position, so
//! replaying the same pointer position yields the same tentative rectangle.

use crate::geometry::{clamp_min_wins, Rect, ScreenVector, Size};

/// Result of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragRelease {
    /// The pointer never left the tap threshold
    Tap,
    /// The marker was dragged
    Moved {
        /// Position clamped into the marker's own page
        clamped: Rect,
        /// Where the pointer actually carried the marker, ignoring page edges
        free: Rect,
    },
}

#[derive(Debug, Clone)]
pub struct DragController {
    start: Rect,
    threshold_px: f64,
    engaged: bool,
    last_movement: ScreenVector,
    tentative: Option<Rect>,
}

impl DragController {
    /// Start a drag from the committed rectangle
    pub fn new(start: Rect, threshold_px: f64) -> Self {
        Self {
            start,
            threshold_px,
            engaged: false,
            last_movement: ScreenVector::default(),
            tentative: None,
        }
    }

    pub fn start(&self) -> Rect {
        self.start
    }

    /// True once the pointer has travelled past the tap threshold
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn tentative(&self) -> Option<Rect> {
        self.tentative
    }

    /// Feed the movement since gesture start. Returns the tentative rectangle
    /// once the drag is engaged, `None` while still within the tap threshold.
    pub fn update(&mut self, movement: ScreenVector, zoom: f64, page: Size) -> Option<Rect> {
        self.last_movement = movement;
        if !self.engaged && movement.max_axis() < self.threshold_px {
            return None;
        }
        self.engaged = true;
        let (clamped, _) = self.project(movement, zoom, page);
        self.tentative = Some(clamped);
        self.tentative
    }

    /// Finish the drag against live zoom and page size
    pub fn release(&self, zoom: f64, page: Size) -> DragRelease {
        if !self.engaged {
            return DragRelease::Tap;
        }
        let (clamped, free) = self.project(self.last_movement, zoom, page);
        DragRelease::Moved { clamped, free }
    }

    fn project(&self, movement: ScreenVector, zoom: f64, page: Size) -> (Rect, Rect) {
        let (dx, dy) = movement.to_document(zoom);
        let free = Rect {
            x: self.start.x + dx,
            y: self.start.y + dy,
            ..self.start
        };
        let clamped = Rect {
            x: clamp_min_wins(free.x, 0.0, page.width - free.width),
            y: clamp_min_wins(free.y, 0.0, page.height - free.height),
            ..free
        };
        (clamped, free)
    }
}
