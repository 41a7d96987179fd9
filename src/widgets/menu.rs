// Mobile navigation: a toggle button opens and closes the menu panel, and
// following any link inside the panel closes it again.

use crate::config::MenuConfig;
use crate::utils;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

struct MenuElements {
    toggle: Element,
    menu: Element,
    body: Option<HtmlElement>,
    active_class: &'static str,
}

impl MenuElements {
    fn apply(&self, open: bool) -> Result<(), JsValue> {
        self.toggle
            .class_list()
            .toggle_with_force(self.active_class, open)?;
        self.menu
            .class_list()
            .toggle_with_force(self.active_class, open)?;
        utils::set_expanded(&self.toggle, open)?;
        // Locks page scrolling underneath the open menu
        if let Some(body) = &self.body {
            if open {
                body.style().set_property("overflow", "hidden")?;
            } else {
                body.style().remove_property("overflow")?;
            }
        }
        Ok(())
    }
}

pub struct MobileMenu {
    state: Rc<Cell<MenuState>>,
    _on_toggle: Closure<dyn FnMut()>,
    _on_link: Closure<dyn FnMut()>,
}

impl MobileMenu {
    pub fn attach(document: &Document, config: &MenuConfig) -> Result<Option<Self>, JsValue> {
        let (toggle, menu) = match (
            document.get_element_by_id(config.toggle_id),
            document.get_element_by_id(config.menu_id),
        ) {
            (Some(toggle), Some(menu)) => (toggle, menu),
            _ => {
                debug!(toggle = config.toggle_id, menu = config.menu_id, "mobile menu not found");
                return Ok(None);
            }
        };

        let links = utils::query_all(&menu, "a")?;
        let elements = Rc::new(MenuElements {
            toggle: toggle.clone(),
            menu,
            body: document.body(),
            active_class: config.active_class,
        });
        let state = Rc::new(Cell::new(MenuState::default()));

        let on_toggle = {
            let elements = elements.clone();
            let state = state.clone();
            Closure::wrap(Box::new(move || {
                let mut next = state.get();
                let open = next.toggle();
                state.set(next);
                let _ = elements.apply(open);
            }) as Box<dyn FnMut()>)
        };
        toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;

        let on_link = {
            let elements = elements.clone();
            let state = state.clone();
            Closure::wrap(Box::new(move || {
                let mut next = state.get();
                next.close();
                state.set(next);
                let _ = elements.apply(false);
            }) as Box<dyn FnMut()>)
        };
        for link in &links {
            link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref())?;
        }

        Ok(Some(MobileMenu {
            state,
            _on_toggle: on_toggle,
            _on_link: on_link,
        }))
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_open_flag() {
        let mut state = MenuState::default();
        assert!(!state.is_open());
        assert!(state.toggle());
        assert!(state.is_open());
        assert!(!state.toggle());
        assert!(!state.is_open());
    }

    #[test]
    fn close_forces_closed() {
        let mut state = MenuState::default();
        state.toggle();
        state.close();
        assert!(!state.is_open());
        state.close();
        assert!(!state.is_open());
    }
}
