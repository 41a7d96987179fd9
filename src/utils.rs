use tracing::Level;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Routes `tracing` events to the browser console
pub fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

// Every element matching `selector` under `root`, in document order
pub fn query_all(root: &impl AsRef<web_sys::Node>, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = match root.as_ref().dyn_ref::<Element>() {
        Some(element) => element.query_selector_all(selector)?,
        None => root
            .as_ref()
            .dyn_ref::<Document>()
            .ok_or_else(|| JsValue::from_str("query root is neither an element nor a document"))?
            .query_selector_all(selector)?,
    };
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub fn set_expanded(element: &Element, expanded: bool) -> Result<(), JsValue> {
    element.set_attribute("aria-expanded", if expanded { "true" } else { "false" })
}
