//! Browser location facility: read, write and watch the URL fragment.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// Current `#...` fragment, empty when there is none.
pub fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Navigate by setting the fragment. Fires `hashchange`, adds a history entry.
pub fn push_fragment(fragment: &str) {
    if let Some(w) = window() {
        if w.location().set_hash(fragment).is_err() {
            log::warn!("location: could not set fragment {}", fragment);
        }
    }
}

/// Swap the fragment in place. Does not fire `hashchange` and leaves no
/// history entry behind, so a guarded URL is not revisited with Back.
pub fn replace_fragment(fragment: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment));
        }
    }
}

/// `hashchange` subscription. Dropping it unsubscribes.
pub struct HashListener {
    closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl HashListener {
    /// Call `on_change` with the new fragment after every `hashchange`.
    pub fn subscribe(mut on_change: impl FnMut(String) + 'static) -> Option<Self> {
        let w = window()?;
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            on_change(current_fragment());
        }) as Box<dyn FnMut(web_sys::Event)>);

        w.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            closure: Some(closure),
        })
    }

    /// Keep listening until the page unloads.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for HashListener {
    fn drop(&mut self) {
        if let (Some(closure), Some(w)) = (self.closure.take(), window()) {
            let _ = w.remove_event_listener_with_callback(
                "hashchange",
                closure.as_ref().unchecked_ref(),
            );
        }
    }
}
