//! The gesture engine
//!
//! `OverlayEngine` routes pointer and touch events to per-marker gesture
//! sessions, keeps tentative state out of the committed store, and reports
//! exactly one update to the host per completed gesture.
//!
//! Page geometry is passed into every call that needs it and never stored,
//! so a scroll or zoom change mid-gesture is picked up on the next event.

use crate::config::{EngineConfig, KindBounds, SizingGesture};
use crate::display::DisplayFrame;
use crate::drag::{DragController, DragRelease};
use crate::error::OverlayError;
use crate::geometry::{Rect, ScreenPoint, Size};
use crate::host::{CaptureGuard, OverlayHost, PointerCapture};
use crate::locator::{Location, PageLocator};
use crate::overlay::{Overlay, OverlayColor, OverlayId, OverlayKind, OverlayStore, OverlayUpdate};
use crate::page::PageGeometry;
use crate::pinch::{PinchController, TouchPair};
use crate::resize::{Corner, CornerResizeController};
use crate::session::{transition, Controller, GestureSession, SessionEvent, SessionKind, Transition};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, instrument, trace, warn};

/// Why an event had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The marker does not exist (never placed, or already removed)
    UnknownOverlay,
    /// No gesture is running on the marker
    NoActiveGesture,
    /// Another gesture owns the marker
    Busy(SessionKind),
    /// Corner handles only exist on the selected marker
    NotSelected,
    /// The marker's page has no usable geometry right now
    MissingGeometry,
    /// Touch points arrived for a pinch started without any
    NoTouchBaseline,
}

/// What an event did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    Started(SessionKind),
    /// Drag still inside the tap threshold
    Pending,
    /// Visual-only state; nothing was written
    Tentative(Rect),
    Committed(OverlayUpdate),
    /// Press and release without a drag; the marker is now selected
    Tap,
    /// Gesture ended before producing any tentative state
    Unchanged,
    Aborted,
    Ignored(IgnoreReason),
}

pub struct OverlayEngine<H: OverlayHost> {
    config: EngineConfig,
    store: OverlayStore,
    sessions: HashMap<OverlayId, GestureSession>,
    selected: Option<OverlayId>,
    capture: Option<Rc<dyn PointerCapture>>,
    host: H,
}

impl<H: OverlayHost> OverlayEngine<H> {
    /// Create an engine with a validated configuration
    pub fn new(config: EngineConfig, host: H) -> Result<Self, OverlayError> {
        if let Err(err) = config.validate() {
            warn!(%err, "rejected engine configuration");
            return Err(err.into());
        }
        Ok(Self {
            config,
            store: OverlayStore::new(),
            sessions: HashMap::new(),
            selected: None,
            capture: None,
            host,
        })
    }

    /// Acquire pointer capture on this target for every gesture
    pub fn with_pointer_capture(mut self, capture: Rc<dyn PointerCapture>) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Replace (or clear) the capture target for gestures started from now on
    pub fn set_pointer_capture(&mut self, capture: Option<Rc<dyn PointerCapture>>) {
        self.capture = capture;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &OverlayStore {
        &self.store
    }

    pub fn overlay(&self, id: &OverlayId) -> Option<&Overlay> {
        self.store.get(id)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    // ============================================================
    // Placement and removal
    // ============================================================

    /// Place a new marker with the kind's default size, top-left at (x, y)
    pub fn place_at(
        &mut self,
        kind: OverlayKind,
        page: usize,
        x: f64,
        y: f64,
        geometry: &dyn PageGeometry,
    ) -> Result<OverlayId, OverlayError> {
        let size = kind.default_size();
        self.place(kind, page, Rect::new(x, y, size.width, size.height), geometry)
    }

    /// Place a new marker. Its size is clamped to the kind's bounds and it is
    /// moved fully onto the page.
    pub fn place(
        &mut self,
        kind: OverlayKind,
        page: usize,
        rect: Rect,
        geometry: &dyn PageGeometry,
    ) -> Result<OverlayId, OverlayError> {
        let id = OverlayId::generate();
        self.insert(Overlay::new(id.clone(), kind, page, rect), geometry)?;
        Ok(id)
    }

    /// Mirror a marker that already exists in the host store
    pub fn insert(
        &mut self,
        mut overlay: Overlay,
        geometry: &dyn PageGeometry,
    ) -> Result<(), OverlayError> {
        let page_size = checked_page(geometry, overlay.page)?;
        let limits = self
            .config
            .bounds
            .for_kind(overlay.kind)
            .limits(SizingGesture::CornerResize, page_size);
        let size = limits.clamp(overlay.size());
        let rect = Rect {
            width: size.width,
            height: size.height,
            ..overlay.rect()
        }
        .clamped_to(page_size);
        overlay.apply(&OverlayUpdate::resized(rect));

        debug!(id = %overlay.id, kind = %overlay.kind, page = overlay.page, "overlay placed");
        self.store.insert(overlay)
    }

    /// Delete a marker. Any running gesture on it is dropped without a commit.
    pub fn remove(&mut self, id: &OverlayId) -> bool {
        if self.sessions.remove(id).is_some() {
            debug!(%id, "gesture dropped by removal");
        }
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        match self.store.remove(id) {
            Some(_) => {
                self.host.remove(id);
                debug!(%id, "overlay removed");
                true
            }
            None => false,
        }
    }

    pub fn set_color(&mut self, id: &OverlayId, color: OverlayColor) -> bool {
        self.store.set_color(id, color)
    }

    // ============================================================
    // Selection
    // ============================================================

    pub fn select(&mut self, id: &OverlayId) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&OverlayId> {
        self.selected.as_ref()
    }

    /// A press outside every marker: abort all gestures and clear the selection.
    /// Returns the number of aborted gestures.
    pub fn click_away(&mut self) -> usize {
        self.selected = None;
        self.abort_all()
    }

    // ============================================================
    // Gesture lifecycle
    // ============================================================

    pub fn session_kind(&self, id: &OverlayId) -> SessionKind {
        self.sessions
            .get(id)
            .map_or(SessionKind::Idle, GestureSession::kind)
    }

    /// Tentative rectangle of a running gesture
    pub fn tentative(&self, id: &OverlayId) -> Option<Rect> {
        self.sessions.get(id).and_then(GestureSession::tentative)
    }

    /// Where to draw a marker right now
    pub fn display_frame(&self, id: &OverlayId, zoom: f64) -> Option<DisplayFrame> {
        let overlay = self.store.get(id)?;
        let rect = self.tentative(id).unwrap_or_else(|| overlay.rect());
        Some(DisplayFrame::new(
            rect,
            zoom,
            self.config.hit_padding,
            self.sessions.contains_key(id),
            self.selected.as_ref() == Some(id),
        ))
    }

    /// Pointer pressed on the marker body
    pub fn begin_drag(&mut self, id: &OverlayId, at: ScreenPoint) -> GestureOutcome {
        let threshold = self.config.tap_threshold_px;
        self.begin(id, SessionEvent::BeginDrag, |start| Controller::Drag {
            origin: at,
            drag: DragController::new(start, threshold),
        })
    }

    /// Pinch started with an explicit scale stream to follow
    pub fn begin_pinch(&mut self, id: &OverlayId) -> GestureOutcome {
        let scale_bounds = self.config.scale_bounds;
        self.begin(id, SessionEvent::BeginPinch, |start| {
            Controller::Pinch(PinchController::new(start, scale_bounds))
        })
    }

    /// Pinch started from two touch points
    pub fn begin_pinch_touches(&mut self, id: &OverlayId, touches: TouchPair) -> GestureOutcome {
        let scale_bounds = self.config.scale_bounds;
        self.begin(id, SessionEvent::BeginPinch, |start| {
            Controller::Pinch(PinchController::with_touches(start, scale_bounds, touches))
        })
    }

    /// Pointer pressed on a corner handle of the selected marker
    pub fn begin_resize(&mut self, id: &OverlayId, corner: Corner, at: ScreenPoint) -> GestureOutcome {
        if self.store.contains(id) && self.selected.as_ref() != Some(id) {
            return ignore(id, IgnoreReason::NotSelected);
        }
        self.begin(id, SessionEvent::BeginResize(corner), |start| Controller::Resize {
            origin: at,
            resize: CornerResizeController::new(corner, start),
        })
    }

    fn begin(
        &mut self,
        id: &OverlayId,
        event: SessionEvent,
        build: impl FnOnce(Rect) -> Controller,
    ) -> GestureOutcome {
        let Some(overlay) = self.store.get(id) else {
            return ignore(id, IgnoreReason::UnknownOverlay);
        };
        let start = overlay.rect();
        let current = self.session_kind(id);

        match transition(current, event) {
            Transition::Enter(kind) | Transition::Preempt(kind) => {
                // Release the preempted session's capture before acquiring a new one
                if self.sessions.remove(id).is_some() {
                    debug!(%id, from = ?current, to = ?kind, "gesture preempted");
                }
                let capture = self
                    .capture
                    .clone()
                    .map(|target| CaptureGuard::acquire(target, id.clone()));
                self.sessions
                    .insert(id.clone(), GestureSession::new(build(start), capture));
                debug!(%id, ?kind, "gesture started");
                GestureOutcome::Started(kind)
            }
            _ => ignore(id, IgnoreReason::Busy(current)),
        }
    }

    /// Pointer moved during a drag or a corner resize
    pub fn pointer_move(
        &mut self,
        id: &OverlayId,
        at: ScreenPoint,
        geometry: &dyn PageGeometry,
    ) -> GestureOutcome {
        let Some((page, bounds)) = self.page_and_bounds(id) else {
            return ignore(id, IgnoreReason::UnknownOverlay);
        };
        let Some(page_size) = live_page_size(geometry, page) else {
            warn!(%id, page, "page geometry unavailable, keeping tentative state");
            return ignore(id, IgnoreReason::MissingGeometry);
        };
        let zoom = geometry.zoom();
        let Some(session) = self.sessions.get_mut(id) else {
            return ignore(id, IgnoreReason::NoActiveGesture);
        };

        let kind = session.kind();
        if transition(kind, SessionEvent::Move) != Transition::Stay {
            return ignore(id, IgnoreReason::NoActiveGesture);
        }

        let outcome = match session.controller_mut() {
            Controller::Drag { origin, drag } => {
                match drag.update(at.offset_from(*origin), zoom, page_size) {
                    Some(rect) => GestureOutcome::Tentative(rect),
                    None => GestureOutcome::Pending,
                }
            }
            Controller::Resize { origin, resize } => {
                let limits = bounds.limits(SizingGesture::CornerResize, page_size);
                GestureOutcome::Tentative(resize.update(
                    at.offset_from(*origin),
                    zoom,
                    limits,
                    page_size,
                ))
            }
            Controller::Pinch(_) => return ignore(id, IgnoreReason::Busy(kind)),
        };
        trace!(%id, ?outcome, "pointer move");
        outcome
    }

    /// Pinch scale changed (relative to gesture start)
    pub fn pinch_to(
        &mut self,
        id: &OverlayId,
        scale: f64,
        geometry: &dyn PageGeometry,
    ) -> GestureOutcome {
        let Some((page, bounds)) = self.page_and_bounds(id) else {
            return ignore(id, IgnoreReason::UnknownOverlay);
        };
        let Some(page_size) = live_page_size(geometry, page) else {
            warn!(%id, page, "page geometry unavailable, keeping tentative state");
            return ignore(id, IgnoreReason::MissingGeometry);
        };
        let Some(session) = self.sessions.get_mut(id) else {
            return ignore(id, IgnoreReason::NoActiveGesture);
        };

        let kind = session.kind();
        let Controller::Pinch(pinch) = session.controller_mut() else {
            return ignore(id, IgnoreReason::Busy(kind));
        };
        let limits = bounds.limits(SizingGesture::Pinch, page_size);
        let rect = pinch.update(scale, limits, page_size);
        trace!(%id, scale, ?rect, "pinch");
        GestureOutcome::Tentative(rect)
    }

    /// Touch points moved during a pinch started with
    /// [`begin_pinch_touches`](Self::begin_pinch_touches)
    pub fn pinch_touches(
        &mut self,
        id: &OverlayId,
        touches: TouchPair,
        geometry: &dyn PageGeometry,
    ) -> GestureOutcome {
        let scale = match self.sessions.get(id).map(GestureSession::controller) {
            Some(Controller::Pinch(pinch)) if pinch.has_touch_baseline() => {
                pinch.touch_scale(touches)
            }
            Some(Controller::Pinch(_)) => return ignore(id, IgnoreReason::NoTouchBaseline),
            Some(_) => return ignore(id, IgnoreReason::Busy(self.session_kind(id))),
            None if !self.store.contains(id) => {
                return ignore(id, IgnoreReason::UnknownOverlay)
            }
            None => return ignore(id, IgnoreReason::NoActiveGesture),
        };
        self.pinch_to(id, scale, geometry)
    }

    /// Pointer released or fingers lifted: commit the gesture
    #[instrument(level = "debug", skip_all, fields(id = %id))]
    pub fn end_gesture(&mut self, id: &OverlayId, geometry: &dyn PageGeometry) -> GestureOutcome {
        let Some((page, bounds)) = self.page_and_bounds(id) else {
            self.sessions.remove(id);
            return ignore(id, IgnoreReason::UnknownOverlay);
        };
        let Some(session) = self.sessions.remove(id) else {
            return ignore(id, IgnoreReason::NoActiveGesture);
        };
        let committed_size = session.start().size();
        let zoom = geometry.zoom();
        let live = live_page_size(geometry, page);
        if live.is_none() {
            warn!(page, "page geometry unavailable at commit, using last tentative state");
        }

        let update = match session.controller() {
            Controller::Drag { drag, .. } => {
                if !drag.is_engaged() {
                    self.selected = Some(id.clone());
                    debug!("tap");
                    return GestureOutcome::Tap;
                }
                match live {
                    Some(page_size) => self.locate_drag(drag, page, page_size, zoom, geometry),
                    None => match drag.tentative() {
                        Some(rect) => position_update(None, rect, committed_size),
                        None => return GestureOutcome::Unchanged,
                    },
                }
            }
            Controller::Pinch(pinch) => {
                let rect = match live {
                    Some(page_size) => {
                        pinch.release(bounds.limits(SizingGesture::Pinch, page_size), page_size)
                    }
                    None => pinch.tentative(),
                };
                match rect {
                    Some(rect) => OverlayUpdate::resized(rect),
                    None => return GestureOutcome::Unchanged,
                }
            }
            Controller::Resize { resize, .. } => {
                let rect = match live {
                    Some(page_size) => resize.release(
                        zoom,
                        bounds.limits(SizingGesture::CornerResize, page_size),
                        page_size,
                    ),
                    None => resize.tentative(),
                };
                match rect {
                    Some(rect) => OverlayUpdate::resized(rect),
                    None => return GestureOutcome::Unchanged,
                }
            }
        };

        // Release capture before the host sees the update
        drop(session);
        self.commit(id, update)
    }

    fn locate_drag(
        &self,
        drag: &DragController,
        page: usize,
        page_size: Size,
        zoom: f64,
        geometry: &dyn PageGeometry,
    ) -> OverlayUpdate {
        let (clamped, free) = match drag.release(zoom, page_size) {
            DragRelease::Moved { clamped, free } => (clamped, free),
            // Callers check engagement first
            DragRelease::Tap => {
                let start = drag.start();
                (start, start)
            }
        };
        match PageLocator::new(geometry).locate(page, free) {
            Location::OtherPage { page: target, rect } => {
                debug!(from = page, to = target, "overlay migrated");
                position_update(Some(target), rect, free.size())
            }
            Location::SamePage => position_update(None, clamped.clamped_to(page_size), free.size()),
            Location::Outside => {
                debug!("drag ended outside every page, keeping page");
                position_update(None, clamped.clamped_to(page_size), free.size())
            }
        }
    }

    fn commit(&mut self, id: &OverlayId, update: OverlayUpdate) -> GestureOutcome {
        if !self.store.apply(id, &update) {
            return ignore(id, IgnoreReason::UnknownOverlay);
        }
        self.host.update(id, update);
        debug!(?update, "gesture committed");
        GestureOutcome::Committed(update)
    }

    /// Pointer left the capture region or the gesture was cancelled
    pub fn abort(&mut self, id: &OverlayId) -> GestureOutcome {
        match self.sessions.remove(id) {
            Some(session) => {
                debug!(%id, kind = ?session.kind(), "gesture aborted");
                GestureOutcome::Aborted
            }
            None if !self.store.contains(id) => ignore(id, IgnoreReason::UnknownOverlay),
            None => ignore(id, IgnoreReason::NoActiveGesture),
        }
    }

    /// Abort every running gesture, returning how many there were
    pub fn abort_all(&mut self) -> usize {
        let count = self.sessions.len();
        if count > 0 {
            debug!(count, "aborting all gestures");
        }
        self.sessions.clear();
        count
    }

    fn page_and_bounds(&self, id: &OverlayId) -> Option<(usize, KindBounds)> {
        let overlay = self.store.get(id)?;
        Some((overlay.page, *self.config.bounds.for_kind(overlay.kind)))
    }
}

fn ignore(id: &OverlayId, reason: IgnoreReason) -> GestureOutcome {
    trace!(%id, ?reason, "event ignored");
    GestureOutcome::Ignored(reason)
}

/// Live size of a page, if it is usable
fn live_page_size(geometry: &dyn PageGeometry, page: usize) -> Option<Size> {
    if page >= geometry.page_count() {
        return None;
    }
    geometry.page_size(page).filter(|size| !size.is_degenerate())
}

fn checked_page(geometry: &dyn PageGeometry, page: usize) -> Result<Size, OverlayError> {
    let count = geometry.page_count();
    if page >= count {
        return Err(OverlayError::PageOutOfRange { index: page, count });
    }
    live_page_size(geometry, page).ok_or(OverlayError::MissingPageGeometry(page))
}

/// Position update, carrying the size too when fitting the page shrank it
fn position_update(page: Option<usize>, rect: Rect, committed: Size) -> OverlayUpdate {
    let mut update = match page {
        Some(page) => OverlayUpdate::migrated(page, rect.x, rect.y),
        None => OverlayUpdate::moved(rect.x, rect.y),
    };
    if rect.size() != committed {
        update.width = Some(rect.width);
        update.height = Some(rect.height);
    }
    update
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::host::HostEvent;
    use crate::page::{ScrollOffset, StackedLayout};
    use proptest::prelude::*;

    fn kind() -> impl Strategy<Value = OverlayKind> {
        prop_oneof![Just(OverlayKind::Field), Just(OverlayKind::Signature)]
    }

    fn corner() -> impl Strategy<Value = Corner> {
        prop_oneof![
            Just(Corner::NorthWest),
            Just(Corner::NorthEast),
            Just(Corner::SouthWest),
            Just(Corner::SouthEast),
        ]
    }

    fn pages() -> impl Strategy<Value = StackedLayout> {
        (
            prop::collection::vec((300.0f64..1500.0, 300.0f64..1500.0), 1..4),
            0.0f64..40.0,
            0.25f64..4.0,
            0.0f64..3000.0,
        )
            .prop_map(|(sizes, gap, zoom, scroll)| {
                let mut layout =
                    StackedLayout::new(sizes.into_iter().map(|(w, h)| Size::new(w, h)).collect())
                        .with_gap(gap);
                layout.set_zoom(zoom);
                layout.scroll_to(ScrollOffset::vertical(scroll));
                layout
            })
    }

    fn movement() -> impl Strategy<Value = ScreenPoint> {
        (-4000.0f64..4000.0, -4000.0f64..4000.0).prop_map(|(x, y)| ScreenPoint::new(x, y))
    }

    fn assert_on_page(engine: &OverlayEngine<Vec<HostEvent>>, id: &OverlayId, pages: &StackedLayout) {
        let overlay = engine.overlay(id).unwrap();
        assert!(overlay.page < pages.pages.len());
        let page = pages.pages[overlay.page];
        assert!(
            overlay.rect().fits_within(page),
            "{:?} escapes page {} {:?}",
            overlay.rect(),
            overlay.page,
            page
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: every committed marker stays inside its page
        #[test]
        fn committed_markers_stay_on_page(
            layout in pages(),
            kind in kind(),
            (fx, fy) in (0.0f64..1.0, 0.0f64..1.0),
            moves in prop::collection::vec(movement(), 1..6),
            scale in 0.1f64..8.0,
            corner in corner(),
        ) {
            let mut engine = OverlayEngine::new(EngineConfig::default(), Vec::new()).unwrap();
            let first = layout.pages[0];
            let id = engine
                .place_at(kind, 0, fx * first.width, fy * first.height, &layout)
                .unwrap();
            engine.select(&id);

            for to in &moves {
                engine.begin_drag(&id, ScreenPoint::new(0.0, 0.0));
                engine.pointer_move(&id, *to, &layout);
                engine.end_gesture(&id, &layout);
                assert_on_page(&engine, &id, &layout);
            }

            engine.begin_pinch(&id);
            engine.pinch_to(&id, scale, &layout);
            engine.end_gesture(&id, &layout);
            assert_on_page(&engine, &id, &layout);

            engine.select(&id);
            engine.begin_resize(&id, corner, ScreenPoint::new(0.0, 0.0));
            engine.pointer_move(&id, moves[0], &layout);
            engine.end_gesture(&id, &layout);
            assert_on_page(&engine, &id, &layout);
        }

        /// Property: repeating the last pointer position does not change the commit
        #[test]
        fn repeated_move_is_idempotent(
            layout in pages(),
            to in movement(),
        ) {
            let run = |repeat: usize| {
                let mut engine = OverlayEngine::new(EngineConfig::default(), Vec::new()).unwrap();
                let id = OverlayId::from("m");
                engine
                    .insert(
                        Overlay::new(id.clone(), OverlayKind::Field, 0, Rect::new(50.0, 50.0, 150.0, 30.0)),
                        &layout,
                    )
                    .unwrap();
                engine.begin_drag(&id, ScreenPoint::new(0.0, 0.0));
                for _ in 0..repeat {
                    engine.pointer_move(&id, to, &layout);
                }
                engine.end_gesture(&id, &layout);
                engine.overlay(&id).cloned()
            };
            prop_assert_eq!(run(1), run(3));
        }

        /// Property: any pinch scale above the bound commits like the bound itself
        #[test]
        fn pinch_scale_saturates(
            kind in kind(),
            scale in 3.0f64..1000.0,
        ) {
            let layout = StackedLayout::new(vec![Size::new(800.0, 1000.0)]);
            let commit = |scale: f64| {
                let mut engine = OverlayEngine::new(EngineConfig::default(), Vec::new()).unwrap();
                let id = OverlayId::from("m");
                engine
                    .insert(Overlay::new(id.clone(), kind, 0, Rect::new(100.0, 100.0, 100.0, 60.0)), &layout)
                    .unwrap();
                engine.begin_pinch(&id);
                engine.pinch_to(&id, scale, &layout);
                engine.end_gesture(&id, &layout)
            };
            prop_assert_eq!(commit(scale), commit(3.0));
        }

        /// Property: any pinch scale below the bound commits like the bound itself
        #[test]
        fn pinch_scale_floor_saturates(
            kind in kind(),
            scale in 0.0f64..0.5,
        ) {
            let layout = StackedLayout::new(vec![Size::new(800.0, 1000.0)]);
            let commit = |scale: f64| {
                let mut engine = OverlayEngine::new(EngineConfig::default(), Vec::new()).unwrap();
                let id = OverlayId::from("m");
                engine
                    .insert(Overlay::new(id.clone(), kind, 0, Rect::new(100.0, 100.0, 200.0, 100.0)), &layout)
                    .unwrap();
                engine.begin_pinch(&id);
                engine.pinch_to(&id, scale, &layout);
                engine.end_gesture(&id, &layout)
            };
            prop_assert_eq!(commit(scale), commit(0.5));
            prop_assert_eq!(
                commit(scale),
                GestureOutcome::Committed(OverlayUpdate::resized(Rect::new(150.0, 125.0, 100.0, 50.0)))
            );
        }
    }
}
