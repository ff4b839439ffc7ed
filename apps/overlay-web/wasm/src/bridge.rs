//! JavaScript callbacks behind the engine's host traits

use js_sys::Function;
use overlay_core::{HostEvent, OverlayHost, OverlayId, OverlayUpdate, PointerCapture};
use wasm_bindgen::JsValue;

/// Forwards committed changes to JavaScript and keeps a log of them
#[derive(Default)]
pub struct JsHost {
    on_update: Option<Function>,
    on_remove: Option<Function>,
    log: Vec<HostEvent>,
}

impl JsHost {
    /// Callback signature: (id: string, update: {x?, y?, width?, height?, page?}) => void
    pub fn set_on_update(&mut self, callback: Function) {
        self.on_update = Some(callback);
    }

    /// Callback signature: (id: string) => void
    pub fn set_on_remove(&mut self, callback: Function) {
        self.on_remove = Some(callback);
    }

    /// Take every event since the last drain
    pub fn drain(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.log)
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.log
    }
}

impl OverlayHost for JsHost {
    fn update(&mut self, id: &OverlayId, update: OverlayUpdate) {
        if let Some(ref callback) = self.on_update {
            match serde_wasm_bindgen::to_value(&update) {
                Ok(value) => report(callback.call2(
                    &JsValue::null(),
                    &JsValue::from_str(id.as_str()),
                    &value,
                )),
                Err(e) => warn(&format!("Serialization error: {}", e)),
            }
        }
        self.log.push(HostEvent::Update {
            id: id.clone(),
            update,
        });
    }

    fn remove(&mut self, id: &OverlayId) {
        if let Some(ref callback) = self.on_remove {
            report(callback.call1(&JsValue::null(), &JsValue::from_str(id.as_str())));
        }
        self.log.push(HostEvent::Remove { id: id.clone() });
    }
}

/// Pointer capture driven from JavaScript, usually
/// `element.setPointerCapture` / `releasePointerCapture` on the marker.
pub struct JsCapture {
    acquire: Function,
    release: Function,
}

impl JsCapture {
    pub fn new(acquire: Function, release: Function) -> Self {
        Self { acquire, release }
    }
}

impl PointerCapture for JsCapture {
    fn acquire(&self, id: &OverlayId) {
        report(
            self.acquire
                .call1(&JsValue::null(), &JsValue::from_str(id.as_str())),
        );
    }

    fn release(&self, id: &OverlayId) {
        report(
            self.release
                .call1(&JsValue::null(), &JsValue::from_str(id.as_str())),
        );
    }
}

/// A throwing callback must not abort the gesture
fn report(result: Result<JsValue, JsValue>) {
    if let Err(err) = result {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_2(&JsValue::from_str("overlay callback threw"), &err);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = err;
    }
}

fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
