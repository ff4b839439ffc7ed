//! Stateful overlay editor exposed to JavaScript
//!
//! JavaScript forwards raw pointer and touch events and keeps the page layout
//! current (page sizes, zoom, scroll and, for viewers that do not stack pages
//! flush left, the rendered page boxes). All gesture state lives in Rust; JS
//! only draws what `displayFrame` returns and persists what `onUpdate` reports.

use crate::bridge::{JsCapture, JsHost};
use overlay_core::{
    Corner, DisplayFrame, EngineConfig, GestureOutcome, HostEvent, IgnoreReason, Overlay,
    OverlayColor, OverlayEngine, OverlayError, OverlayId, OverlayKind, OverlayUpdate, Rect,
    ScreenPoint, ScreenRect, ScrollOffset, SessionKind, Size, StackedLayout, TouchPair,
};
use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Overlay editor for one rendered document
#[wasm_bindgen]
pub struct OverlayEditor {
    engine: OverlayEngine<JsHost>,
    layout: StackedLayout,
}

/// Gesture outcome for JS serialization
#[derive(Debug, PartialEq, Serialize)]
struct OutcomeJs {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<SessionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rect: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update: Option<OverlayUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl OutcomeJs {
    fn status(status: &'static str) -> Self {
        Self {
            status,
            session: None,
            rect: None,
            update: None,
            reason: None,
        }
    }
}

impl From<GestureOutcome> for OutcomeJs {
    fn from(outcome: GestureOutcome) -> Self {
        match outcome {
            GestureOutcome::Started(kind) => Self {
                session: Some(kind),
                ..Self::status("started")
            },
            GestureOutcome::Pending => Self::status("pending"),
            GestureOutcome::Tentative(rect) => Self {
                rect: Some(rect),
                ..Self::status("tentative")
            },
            GestureOutcome::Committed(update) => Self {
                update: Some(update),
                ..Self::status("committed")
            },
            GestureOutcome::Tap => Self::status("tap"),
            GestureOutcome::Unchanged => Self::status("unchanged"),
            GestureOutcome::Aborted => Self::status("aborted"),
            GestureOutcome::Ignored(reason) => Self {
                reason: Some(match reason {
                    IgnoreReason::UnknownOverlay => "unknown_overlay",
                    IgnoreReason::NoActiveGesture => "no_active_gesture",
                    IgnoreReason::Busy(_) => "busy",
                    IgnoreReason::NotSelected => "not_selected",
                    IgnoreReason::MissingGeometry => "missing_geometry",
                    IgnoreReason::NoTouchBaseline => "no_touch_baseline",
                }),
                ..Self::status("ignored")
            },
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn outcome_to_js(outcome: GestureOutcome) -> Result<JsValue, JsValue> {
    to_js(&OutcomeJs::from(outcome))
}

fn error_to_js(err: OverlayError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
impl OverlayEditor {
    /// Create an editor. `config` is an optional TOML engine configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<OverlayEditor, JsValue> {
        let config = match config {
            Some(text) => EngineConfig::from_toml_str(&text)
                .map_err(|e| JsValue::from_str(&format!("Config error: {}", e)))?,
            None => EngineConfig::default(),
        };
        Self::with_config(config).map_err(error_to_js)
    }

    // ============================================================
    // Layout (pushed from the viewer)
    // ============================================================

    /// Set page sizes in document units: `[{width, height}, ...]`
    #[wasm_bindgen(js_name = setPages)]
    pub fn set_pages(&mut self, sizes: JsValue) -> Result<(), JsValue> {
        let sizes: Vec<Size> = serde_wasm_bindgen::from_value(sizes)
            .map_err(|e| JsValue::from_str(&format!("Invalid page sizes: {}", e)))?;
        self.set_page_sizes(sizes);
        Ok(())
    }

    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&mut self, zoom: f64) {
        self.layout.set_zoom(zoom);
    }

    #[wasm_bindgen(js_name = setScroll)]
    pub fn set_scroll(&mut self, x: f64, y: f64) {
        self.layout.scroll_to(ScrollOffset::new(x, y));
    }

    /// Rendered page boxes from `getBoundingClientRect()`, one per page:
    /// `[{left, top, width, height}, ...]`. Measure after every zoom change;
    /// an empty array falls back to the stacked column.
    #[wasm_bindgen(js_name = setPageRects)]
    pub fn set_page_rects_js(&mut self, rects: JsValue) -> Result<(), JsValue> {
        let rects: Vec<ScreenRect> = serde_wasm_bindgen::from_value(rects)
            .map_err(|e| JsValue::from_str(&format!("Invalid page rects: {}", e)))?;
        self.set_page_rects(rects);
        Ok(())
    }

    /// Vertical gap between rendered pages, in screen pixels
    #[wasm_bindgen(js_name = setPageGap)]
    pub fn set_page_gap(&mut self, gap: f64) {
        self.layout.gap = gap;
    }

    #[wasm_bindgen(getter, js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.layout.pages.len()
    }

    // ============================================================
    // Host callbacks
    // ============================================================

    /// Callback signature: (id: string, update: object) => void
    #[wasm_bindgen(js_name = onUpdate)]
    pub fn on_update(&mut self, callback: js_sys::Function) {
        self.engine.host_mut().set_on_update(callback);
    }

    /// Callback signature: (id: string) => void
    #[wasm_bindgen(js_name = onRemove)]
    pub fn on_remove(&mut self, callback: js_sys::Function) {
        self.engine.host_mut().set_on_remove(callback);
    }

    /// Capture callbacks, each called with the marker id
    #[wasm_bindgen(js_name = setPointerCapture)]
    pub fn set_pointer_capture(&mut self, acquire: js_sys::Function, release: js_sys::Function) {
        self.engine
            .set_pointer_capture(Some(Rc::new(JsCapture::new(acquire, release))));
    }

    /// Every host event since the last call
    #[wasm_bindgen(js_name = takeEvents)]
    pub fn take_events(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.drain_events())
    }

    // ============================================================
    // Markers
    // ============================================================

    /// Place a new marker with the default size for its kind; returns its id
    #[wasm_bindgen(js_name = placeOverlay)]
    pub fn place_overlay(&mut self, kind: &str, page: usize, x: f64, y: f64) -> Result<String, JsValue> {
        let kind: OverlayKind = kind.parse().map_err(|e: String| JsValue::from_str(&e))?;
        self.engine
            .place_at(kind, page, x, y, &self.layout)
            .map(|id| id.as_str().to_string())
            .map_err(error_to_js)
    }

    /// Mirror a marker from the host store
    #[wasm_bindgen(js_name = insertOverlay)]
    pub fn insert_overlay(&mut self, overlay: JsValue) -> Result<(), JsValue> {
        let overlay: Overlay = serde_wasm_bindgen::from_value(overlay)
            .map_err(|e| JsValue::from_str(&format!("Invalid overlay: {}", e)))?;
        self.engine.insert(overlay, &self.layout).map_err(error_to_js)
    }

    #[wasm_bindgen(js_name = removeOverlay)]
    pub fn remove_overlay(&mut self, id: &str) -> bool {
        self.engine.remove(&OverlayId::from(id))
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, id: &str, hex: &str) -> Result<bool, JsValue> {
        let color = OverlayColor::from_hex(hex).map_err(error_to_js)?;
        Ok(self.engine.set_color(&OverlayId::from(id), color))
    }

    #[wasm_bindgen(js_name = getOverlay)]
    pub fn get_overlay(&self, id: &str) -> Result<JsValue, JsValue> {
        match self.engine.overlay(&OverlayId::from(id)) {
            Some(overlay) => to_js(overlay),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = getOverlays)]
    pub fn get_overlays(&self) -> Result<JsValue, JsValue> {
        let overlays: Vec<&Overlay> = self.engine.store().iter().collect();
        to_js(&overlays)
    }

    /// Screen boxes for drawing a marker, or null if unknown
    #[wasm_bindgen(js_name = displayFrame)]
    pub fn display_frame(&self, id: &str) -> Result<JsValue, JsValue> {
        match self.frame(id) {
            Some(frame) => to_js(&frame),
            None => Ok(JsValue::NULL),
        }
    }

    // ============================================================
    // Selection
    // ============================================================

    pub fn select(&mut self, id: &str) -> bool {
        self.engine.select(&OverlayId::from(id))
    }

    pub fn deselect(&mut self) {
        self.engine.deselect();
    }

    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<String> {
        self.engine.selected().map(|id| id.as_str().to_string())
    }

    /// Press outside every marker; returns the number of aborted gestures
    #[wasm_bindgen(js_name = clickAway)]
    pub fn click_away(&mut self) -> usize {
        self.engine.click_away()
    }

    // ============================================================
    // Pointer and touch events
    // ============================================================

    /// Pointer pressed on a marker body (viewport pixels)
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, id: &str, x: f64, y: f64) -> Result<JsValue, JsValue> {
        outcome_to_js(self.engine.begin_drag(&OverlayId::from(id), ScreenPoint::new(x, y)))
    }

    /// Pointer pressed on a corner handle: "nw", "ne", "sw" or "se"
    #[wasm_bindgen(js_name = cornerDown)]
    pub fn corner_down(&mut self, id: &str, corner: &str, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let corner: Corner = corner.parse().map_err(|e: String| JsValue::from_str(&e))?;
        outcome_to_js(
            self.engine
                .begin_resize(&OverlayId::from(id), corner, ScreenPoint::new(x, y)),
        )
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, id: &str, x: f64, y: f64) -> Result<JsValue, JsValue> {
        outcome_to_js(self.engine.pointer_move(
            &OverlayId::from(id),
            ScreenPoint::new(x, y),
            &self.layout,
        ))
    }

    /// Pointer released or last finger lifted
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, id: &str) -> Result<JsValue, JsValue> {
        outcome_to_js(self.engine.end_gesture(&OverlayId::from(id), &self.layout))
    }

    /// Pointer cancelled or left the capture region
    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(&mut self, id: &str) -> Result<JsValue, JsValue> {
        outcome_to_js(self.engine.abort(&OverlayId::from(id)))
    }

    /// Second finger landed
    #[wasm_bindgen(js_name = pinchStart)]
    pub fn pinch_start(&mut self, id: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<JsValue, JsValue> {
        let touches = TouchPair::new(ScreenPoint::new(x1, y1), ScreenPoint::new(x2, y2));
        outcome_to_js(self.engine.begin_pinch_touches(&OverlayId::from(id), touches))
    }

    #[wasm_bindgen(js_name = pinchMove)]
    pub fn pinch_move(&mut self, id: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<JsValue, JsValue> {
        let touches = TouchPair::new(ScreenPoint::new(x1, y1), ScreenPoint::new(x2, y2));
        outcome_to_js(
            self.engine
                .pinch_touches(&OverlayId::from(id), touches, &self.layout),
        )
    }

    /// Pinch with a scale from a gesture recognizer instead of raw touches
    #[wasm_bindgen(js_name = pinchScale)]
    pub fn pinch_scale(&mut self, id: &str, scale: f64) -> Result<JsValue, JsValue> {
        let id = OverlayId::from(id);
        if self.engine.session_kind(&id) != SessionKind::Pinching {
            let started = self.engine.begin_pinch(&id);
            if !matches!(started, GestureOutcome::Started(_)) {
                return outcome_to_js(started);
            }
        }
        outcome_to_js(self.engine.pinch_to(&id, scale, &self.layout))
    }
}

// Plain Rust surface, testable without a JS runtime
impl OverlayEditor {
    pub fn with_config(config: EngineConfig) -> Result<Self, OverlayError> {
        Ok(Self {
            engine: OverlayEngine::new(config, JsHost::default())?,
            layout: StackedLayout::new(Vec::new()),
        })
    }

    pub fn set_page_sizes(&mut self, sizes: Vec<Size>) {
        self.layout.pages = sizes;
    }

    /// Viewport-relative page boxes measured at the current scroll offset
    pub fn set_page_rects(&mut self, rects: Vec<ScreenRect>) {
        self.layout.set_measured_bounds(rects);
    }

    pub fn layout(&self) -> &StackedLayout {
        &self.layout
    }

    pub fn engine(&self) -> &OverlayEngine<JsHost> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut OverlayEngine<JsHost> {
        &mut self.engine
    }

    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        self.engine.host_mut().drain()
    }

    pub fn frame(&self, id: &str) -> Option<DisplayFrame> {
        self.engine
            .display_frame(&OverlayId::from(id), self.layout.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn editor() -> OverlayEditor {
        let mut editor = OverlayEditor::with_config(EngineConfig::default()).unwrap();
        editor.set_page_sizes(vec![Size::new(612.0, 792.0), Size::new(612.0, 792.0)]);
        editor
    }

    fn place(editor: &mut OverlayEditor, kind: OverlayKind, page: usize, x: f64, y: f64) -> OverlayId {
        let layout = editor.layout().clone();
        editor.engine_mut().place_at(kind, page, x, y, &layout).unwrap()
    }

    #[test]
    fn test_zoomed_drag_commits_document_units() {
        let mut editor = editor();
        editor.set_zoom(2.0);
        let id = place(&mut editor, OverlayKind::Signature, 0, 100.0, 100.0);

        let layout = editor.layout().clone();
        let engine = editor.engine_mut();
        engine.begin_drag(&id, ScreenPoint::new(10.0, 10.0));
        engine.pointer_move(&id, ScreenPoint::new(110.0, 50.0), &layout);
        let outcome = engine.end_gesture(&id, &layout);

        assert_eq!(outcome, GestureOutcome::Committed(OverlayUpdate::moved(150.0, 120.0)));
        assert_eq!(
            editor.drain_events(),
            vec![HostEvent::Update {
                id,
                update: OverlayUpdate::moved(150.0, 120.0)
            }]
        );
    }

    #[test]
    fn test_frame_follows_zoom() {
        let mut editor = editor();
        let id = place(&mut editor, OverlayKind::Field, 0, 10.0, 20.0);
        editor.set_zoom(1.5);
        let frame = editor.frame(id.as_str()).unwrap();
        assert_eq!(frame.content.left, 15.0);
        assert_eq!(frame.content.width, 225.0);
        assert!(!frame.active);
        assert!(editor.frame("missing").is_none());
    }

    #[test]
    fn test_outcome_js_shape() {
        let json = serde_json::to_value(OutcomeJs::from(GestureOutcome::Committed(
            OverlayUpdate::migrated(1, 5.0, 6.0),
        )))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "committed",
                "update": {"x": 5.0, "y": 6.0, "page": 1}
            })
        );

        let json = serde_json::to_value(OutcomeJs::from(GestureOutcome::Ignored(
            IgnoreReason::NotSelected,
        )))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ignored", "reason": "not_selected"})
        );
    }

    #[test]
    fn test_page_gap_and_scroll_drive_migration() {
        let mut editor = editor();
        editor.set_page_gap(12.0);
        editor.set_scroll(0.0, 500.0);
        let id = place(&mut editor, OverlayKind::Signature, 0, 100.0, 740.0);

        let layout = editor.layout().clone();
        let engine = editor.engine_mut();
        engine.begin_drag(&id, ScreenPoint::new(0.0, 0.0));
        engine.pointer_move(&id, ScreenPoint::new(0.0, 80.0), &layout);
        let outcome = engine.end_gesture(&id, &layout);

        // Center lands at y = 845 absolute, 41px into page 1 (top at 804)
        assert_eq!(outcome, GestureOutcome::Committed(OverlayUpdate::migrated(1, 100.0, 16.0)));
        assert_eq!(editor.engine().overlay(&id).unwrap().page, 1);
    }

    #[test]
    fn test_measured_rects_drive_migration() {
        // Viewer centers a narrow second page under a wide first one
        let mut editor = OverlayEditor::with_config(EngineConfig::default()).unwrap();
        editor.set_page_sizes(vec![Size::new(800.0, 1000.0), Size::new(400.0, 600.0)]);
        editor.set_page_rects(vec![
            ScreenRect::new(0.0, 0.0, 800.0, 1000.0),
            ScreenRect::new(200.0, 1000.0, 400.0, 600.0),
        ]);
        let id = OverlayId::from("sig");
        let layout = editor.layout().clone();
        editor
            .engine_mut()
            .insert(
                Overlay::new(id.clone(), OverlayKind::Signature, 0, Rect::new(500.0, 900.0, 150.0, 80.0)),
                &layout,
            )
            .unwrap();

        let engine = editor.engine_mut();
        engine.begin_drag(&id, ScreenPoint::new(0.0, 0.0));
        engine.pointer_move(&id, ScreenPoint::new(0.0, 100.0), &layout);
        let outcome = engine.end_gesture(&id, &layout);

        // Center at x = 575 is inside page 1 (200..600); local x 300 clamps to 250
        assert_eq!(outcome, GestureOutcome::Committed(OverlayUpdate::migrated(1, 250.0, 0.0)));
        assert_eq!(editor.engine().overlay(&id).unwrap().page, 1);
    }

    #[test]
    fn test_page_rects_survive_scrolling() {
        let mut editor = editor();
        editor.set_scroll(0.0, 400.0);
        editor.set_page_rects(vec![
            ScreenRect::new(100.0, -400.0, 612.0, 792.0),
            ScreenRect::new(100.0, 404.0, 612.0, 792.0),
        ]);
        editor.set_scroll(0.0, 0.0);
        assert_eq!(
            editor.layout().page_rects[1],
            ScreenRect::new(100.0, 804.0, 612.0, 792.0)
        );
    }
}
