use std::cell::RefCell;

use wasm_bindgen::JsValue;

/// Page-level record that the widget has already started.
///
/// Lets two copies of the module on one page agree on who runs.
pub trait InitMarker {
    fn is_set(&self) -> bool;
    fn set(&self);
}

/// Marker stored as a property on `window`
pub struct WindowMarker {
    property: &'static str,
}

impl WindowMarker {
    pub fn new(property: &'static str) -> Self {
        Self { property }
    }
}

impl InitMarker for WindowMarker {
    fn is_set(&self) -> bool {
        web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(self.property)).ok())
            .map(|v| v.is_truthy())
            .unwrap_or(false)
    }

    fn set(&self) {
        if let Some(w) = web_sys::window() {
            let _ = js_sys::Reflect::set(&w, &JsValue::from_str(self.property), &JsValue::TRUE);
        }
    }
}

/// Process-wide application state: whether the widget has started
#[derive(Debug, Default)]
pub struct AppContext {
    initialized: bool,
}

impl AppContext {
    pub const fn new() -> Self {
        Self { initialized: false }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Claim the single start of this page. Returns `false` if this context
    /// or another module instance already started; never resets.
    pub fn try_start(&mut self, marker: &impl InitMarker) -> bool {
        if self.initialized || marker.is_set() {
            return false;
        }
        self.initialized = true;
        marker.set();
        true
    }
}

thread_local! {
    static APP_CONTEXT: RefCell<AppContext> = const { RefCell::new(AppContext::new()) };
}

/// Claim the start on the context owned by this module instance
pub fn claim_start(marker: &impl InitMarker) -> bool {
    APP_CONTEXT.with(|ctx| ctx.borrow_mut().try_start(marker))
}
