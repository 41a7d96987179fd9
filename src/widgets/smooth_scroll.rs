// Same-page anchor links scroll smoothly to their target instead of jumping

use crate::utils;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

// Selector for the element a same-page link points at. A bare "#" links
// nowhere, and anything not starting with '#' is not a fragment link.
pub fn fragment_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

pub struct SmoothScroll {
    anchors: usize,
    _on_click: Closure<dyn FnMut(Event)>,
}

impl SmoothScroll {
    pub fn attach(document: &Document, selector: &str) -> Result<Option<Self>, JsValue> {
        let anchors = utils::query_all(document, selector)?;
        if anchors.is_empty() {
            debug!(selector, "no fragment links");
            return Ok(None);
        }

        let on_click = {
            let document = document.clone();
            Closure::wrap(Box::new(move |event: Event| {
                let anchor = match event
                    .current_target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                {
                    Some(anchor) => anchor,
                    None => return,
                };
                let href = anchor.get_attribute("href").unwrap_or_default();
                let selector = match fragment_target(&href) {
                    Some(selector) => selector,
                    None => return,
                };
                // invalid selectors throw, treat them like a missing target
                if let Ok(Some(target)) = document.query_selector(selector) {
                    event.prevent_default();
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }) as Box<dyn FnMut(Event)>)
        };
        for anchor in &anchors {
            anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        }

        Ok(Some(SmoothScroll {
            anchors: anchors.len(),
            _on_click: on_click,
        }))
    }

    pub fn anchors(&self) -> usize {
        self.anchors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn fragment_links_resolve_to_selectors() {
        assert_eq!(fragment_target("#faq"), Some("#faq"));
        assert_eq!(fragment_target("#how-it-works"), Some("#how-it-works"));
    }

    #[test]
    fn other_links_are_not_fragments() {
        assert_eq!(fragment_target("/about#team"), None);
        assert_eq!(fragment_target("https://example.com"), None);
    }
}
