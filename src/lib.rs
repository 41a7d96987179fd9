mod utils;

pub mod background;
pub mod color;
pub mod config;
pub mod debounce;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod renderer;
pub mod surface;
pub mod widgets;

use background::Background;
use config::PageConfig;
use std::cell::RefCell;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use widgets::accordion::FaqAccordion;
use widgets::counter::Counters;
use widgets::menu::MobileMenu;
use widgets::navbar::NavbarWatcher;
use widgets::reveal::ScrollReveal;
use widgets::smooth_scroll::SmoothScroll;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

thread_local! {
    // Everything attached at startup lives as long as the page does
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    utils::set_panic_hook();
    utils::init_tracing();

    let page = Page::attach(&PageConfig::default())?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

// Every behaviour on the page. Each one is optional: missing markup or a
// failure while attaching one never stops the others.
pub struct Page {
    pub background: Option<Background>,
    pub navbar: Option<NavbarWatcher>,
    pub menu: Option<MobileMenu>,
    pub reveal: Option<ScrollReveal>,
    pub counters: Option<Counters>,
    pub faq: Option<FaqAccordion>,
    pub anchors: Option<SmoothScroll>,
}

impl Page {
    pub fn attach(config: &PageConfig) -> Result<Page, JsValue> {
        let window = utils::window()?;
        let document = utils::document()?;

        let page = Page {
            background: attached(
                "particle background",
                Background::attach(&window, &document, config.canvas_id, config.field),
            ),
            navbar: attached(
                "navbar",
                NavbarWatcher::attach(&window, &document, &config.navbar),
            ),
            menu: attached("mobile menu", MobileMenu::attach(&document, &config.menu)),
            reveal: attached(
                "scroll reveal",
                ScrollReveal::attach(&document, &config.reveal),
            ),
            counters: attached("counters", Counters::attach(&document, &config.counters)),
            faq: attached("faq accordion", FaqAccordion::attach(&document, &config.faq)),
            anchors: attached(
                "smooth scroll",
                SmoothScroll::attach(&document, config.anchor_selector),
            ),
        };
        info!("page behaviours attached");
        Ok(page)
    }
}

fn attached<T>(name: &str, result: Result<Option<T>, JsValue>) -> Option<T> {
    match result {
        Ok(Some(component)) => {
            debug!(component = name, "attached");
            Some(component)
        }
        Ok(None) => None,
        Err(err) => {
            warn!(component = name, error = ?err, "failed to attach");
            None
        }
    }
}
