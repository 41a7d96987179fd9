// Marks the navigation bar once the page has scrolled past a threshold

use crate::config::NavbarConfig;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Window};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarState {
    threshold: f64,
    scrolled: bool,
}

impl NavbarState {
    pub fn new(threshold: f64) -> Self {
        NavbarState {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    // Some(new flag) when the scroll position moved across the threshold
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

pub struct NavbarWatcher {
    state: Rc<Cell<NavbarState>>,
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
}

impl NavbarWatcher {
    pub fn attach(
        window: &Window,
        document: &Document,
        config: &NavbarConfig,
    ) -> Result<Option<Self>, JsValue> {
        let navbar = match document.get_element_by_id(config.id) {
            Some(navbar) => navbar,
            None => {
                debug!(id = config.id, "navbar not found");
                return Ok(None);
            }
        };

        let state = Rc::new(Cell::new(NavbarState::new(config.scroll_threshold)));
        let class = config.scrolled_class;
        sync(&navbar, &state, class, window.scroll_y()?)?;

        let on_scroll = {
            let window = window.clone();
            let state = state.clone();
            Closure::wrap(Box::new(move || {
                if let Ok(scroll_y) = window.scroll_y() {
                    let _ = sync(&navbar, &state, class, scroll_y);
                }
            }) as Box<dyn FnMut()>)
        };
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Some(NavbarWatcher {
            state,
            window: window.clone(),
            on_scroll,
        }))
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.get().is_scrolled()
    }
}

impl Drop for NavbarWatcher {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
    }
}

fn sync(
    navbar: &Element,
    state: &Cell<NavbarState>,
    class: &str,
    scroll_y: f64,
) -> Result<(), JsValue> {
    let mut next = state.get();
    if let Some(scrolled) = next.update(scroll_y) {
        navbar.class_list().toggle_with_force(class, scrolled)?;
    }
    state.set(next);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_set_only_past_threshold() {
        let mut state = NavbarState::new(60.0);
        assert_eq!(state.update(0.0), None);
        assert_eq!(state.update(60.0), None);
        assert!(!state.is_scrolled());
        assert_eq!(state.update(60.5), Some(true));
        assert!(state.is_scrolled());
    }

    #[test]
    fn flag_is_reversible_and_idempotent() {
        let mut state = NavbarState::new(60.0);
        assert_eq!(state.update(400.0), Some(true));
        assert_eq!(state.update(800.0), None);
        assert_eq!(state.update(10.0), Some(false));
        assert_eq!(state.update(0.0), None);
        assert!(!state.is_scrolled());
    }
}
