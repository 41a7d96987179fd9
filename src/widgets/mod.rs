// Small interactive behaviours layered over the page markup.
// Each widget keeps its decision logic in a plain value type that can be
// tested off the browser, and a DOM binding that applies it. Bindings return
// `Ok(None)` when the markup they need is missing.

pub mod accordion;
pub mod counter;
pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod smooth_scroll;

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// Runs `on_enter` the first time each target intersects the viewport and
// stops watching that target right after.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl OneShotObserver {
    pub fn observe<F>(
        targets: &[Element],
        threshold: f64,
        root_margin: Option<&str>,
        mut on_enter: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(&Element) -> Result<(), JsValue> + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                        Ok(entry) => entry,
                        Err(_) => continue,
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Err(err) = on_enter(&target) {
                        warn!(error = ?err, "intersection handler failed");
                    }
                    observer.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in targets {
            observer.observe(target);
        }

        Ok(OneShotObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
