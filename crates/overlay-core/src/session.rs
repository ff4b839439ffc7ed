//! Per-marker gesture sessions
//!
//! A marker is in exactly one [`SessionKind`] at a time. Every pointer or
//! touch event is first run through [`transition`]; the engine only touches
//! controllers for transitions the table allows.

use crate::drag::DragController;
use crate::geometry::{Rect, ScreenPoint};
use crate::host::CaptureGuard;
use crate::pinch::PinchController;
use crate::resize::{Corner, CornerResizeController};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "corner", rename_all = "snake_case")]
pub enum SessionKind {
    Idle,
    Dragging,
    Pinching,
    Resizing(Corner),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    BeginDrag,
    BeginPinch,
    BeginResize(Corner),
    Move,
    End,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Open a new session
    Enter(SessionKind),
    /// Drop the running session without committing and open a new one
    Preempt(SessionKind),
    /// Keep the session, update its tentative state
    Stay,
    /// Commit the tentative state and return to idle
    Commit,
    /// Discard the tentative state and return to idle
    Discard,
    /// The event does not apply in this state
    Reject,
}

/// The session transition table
pub fn transition(from: SessionKind, event: SessionEvent) -> Transition {
    use SessionEvent::*;
    use SessionKind::*;

    match (from, event) {
        (Idle, BeginDrag) => Transition::Enter(Dragging),
        (Idle, BeginPinch) => Transition::Enter(Pinching),
        (Idle, BeginResize(corner)) => Transition::Enter(Resizing(corner)),
        (Idle, Move | End | Abort) => Transition::Reject,

        // A second finger turns a drag into a pinch
        (Dragging, BeginPinch) => Transition::Preempt(Pinching),

        (Dragging | Pinching | Resizing(_), Move) => Transition::Stay,
        (Dragging | Pinching | Resizing(_), End) => Transition::Commit,
        (Dragging | Pinching | Resizing(_), Abort) => Transition::Discard,
        (Dragging | Pinching | Resizing(_), BeginDrag | BeginPinch | BeginResize(_)) => {
            Transition::Reject
        }
    }
}

/// Controller state for the active gesture
#[derive(Debug, Clone)]
pub enum Controller {
    Drag {
        origin: ScreenPoint,
        drag: DragController,
    },
    Pinch(PinchController),
    Resize {
        origin: ScreenPoint,
        resize: CornerResizeController,
    },
}

/// One in-flight gesture on one marker. Dropping it releases pointer capture.
#[derive(Debug)]
pub struct GestureSession {
    controller: Controller,
    _capture: Option<CaptureGuard>,
}

impl GestureSession {
    pub fn new(controller: Controller, capture: Option<CaptureGuard>) -> Self {
        Self {
            controller,
            _capture: capture,
        }
    }

    pub fn kind(&self) -> SessionKind {
        match &self.controller {
            Controller::Drag { .. } => SessionKind::Dragging,
            Controller::Pinch(_) => SessionKind::Pinching,
            Controller::Resize { resize, .. } => SessionKind::Resizing(resize.corner()),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Tentative rectangle, if the gesture has produced one yet
    pub fn tentative(&self) -> Option<Rect> {
        match &self.controller {
            Controller::Drag { drag, .. } => drag.tentative(),
            Controller::Pinch(pinch) => pinch.tentative(),
            Controller::Resize { resize, .. } => resize.tentative(),
        }
    }

    /// Rectangle the gesture started from
    pub fn start(&self) -> Rect {
        match &self.controller {
            Controller::Drag { drag, .. } => drag.start(),
            Controller::Pinch(pinch) => pinch.base(),
            Controller::Resize { resize, .. } => resize.start(),
        }
    }
}
