//! WASM bindings for the overlay gesture engine
//!
//! All gesture state is held in Rust. JavaScript forwards pointer and touch
//! events, keeps the page layout current and draws the returned frames.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { OverlayEditor } from './pkg/overlay_wasm.js';
//!
//! await init();
//!
//! const editor = new OverlayEditor();
//! editor.setPages(pdfPages.map(p => ({ width: p.width, height: p.height })));
//! editor.setZoom(viewer.scale);
//! editor.onUpdate((id, update) => store.patch(id, update));
//!
//! const id = editor.placeOverlay("signature", 0, 72, 600);
//! marker.onpointerdown = e => editor.pointerDown(id, e.clientX, e.clientY);
//! marker.onpointermove = e => render(editor.pointerMove(id, e.clientX, e.clientY));
//! marker.onpointerup = () => editor.pointerUp(id);
//! ```

pub mod bridge;
pub mod editor;

use wasm_bindgen::prelude::*;

pub use editor::OverlayEditor;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default marker size for a kind, as `{width, height}`
#[wasm_bindgen(js_name = defaultSize)]
pub fn default_size(kind: &str) -> Result<JsValue, JsValue> {
    let kind: overlay_core::OverlayKind = kind.parse().map_err(|e: String| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&kind.default_size())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
