//! Callbacks into the host document viewer

use crate::overlay::{OverlayId, OverlayUpdate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Receives committed changes. The host store owns persistence.
pub trait OverlayHost {
    /// Called exactly once per completed gesture
    fn update(&mut self, id: &OverlayId, update: OverlayUpdate);

    /// Called when a marker is explicitly deleted
    fn remove(&mut self, id: &OverlayId);
}

/// A host callback, as recorded by [`OverlayHost`] for `Vec<HostEvent>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    Update { id: OverlayId, update: OverlayUpdate },
    Remove { id: OverlayId },
}

impl OverlayHost for Vec<HostEvent> {
    fn update(&mut self, id: &OverlayId, update: OverlayUpdate) {
        self.push(HostEvent::Update {
            id: id.clone(),
            update,
        });
    }

    fn remove(&mut self, id: &OverlayId) {
        self.push(HostEvent::Remove { id: id.clone() });
    }
}

/// Pointer capture for a marker: while held, all pointer events go to the
/// marker even when the pointer leaves it.
pub trait PointerCapture {
    fn acquire(&self, id: &OverlayId);
    fn release(&self, id: &OverlayId);
}

/// Holds pointer capture for one gesture and releases it when dropped.
///
/// Sessions own their guard, so commit, abort, preemption and marker removal
/// all release capture by dropping the session.
pub struct CaptureGuard {
    id: OverlayId,
    target: Rc<dyn PointerCapture>,
}

impl CaptureGuard {
    pub fn acquire(target: Rc<dyn PointerCapture>, id: OverlayId) -> Self {
        target.acquire(&id);
        Self { id, target }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.target.release(&self.id);
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard").field("id", &self.id).finish()
    }
}
