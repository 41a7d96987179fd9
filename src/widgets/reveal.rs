// Fades elements in the first time they scroll into view

use super::OneShotObserver;
use crate::config::RevealConfig;
use crate::utils;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub struct ScrollReveal {
    _observer: OneShotObserver,
}

impl ScrollReveal {
    pub fn attach(document: &Document, config: &RevealConfig) -> Result<Option<Self>, JsValue> {
        let targets = utils::query_all(document, config.selector)?;
        if targets.is_empty() {
            debug!(selector = config.selector, "nothing to reveal");
            return Ok(None);
        }

        let visible_class = config.visible_class;
        let observer = OneShotObserver::observe(
            &targets,
            config.threshold,
            Some(config.root_margin),
            move |target| target.class_list().add_1(visible_class),
        )?;
        debug!(count = targets.len(), "scroll reveal attached");
        Ok(Some(ScrollReveal {
            _observer: observer,
        }))
    }
}
