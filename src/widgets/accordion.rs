// FAQ accordion, at most one item open at a time

use crate::config::FaqConfig;
use crate::utils;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Accordion { len, open: None }
    }

    pub fn with_open(len: usize, open: Option<usize>) -> Self {
        Accordion {
            len,
            open: open.filter(|&index| index < len),
        }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    // Clicking the open item closes everything, clicking any other item
    // makes it the only open one
    pub fn click(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        let was_open = self.is_open(index);
        self.open = None;
        if !was_open {
            self.open = Some(index);
        }
        self.open
    }
}

struct FaqItem {
    item: Element,
    question: Option<Element>,
}

fn render(items: &[FaqItem], state: &Accordion, active_class: &str) -> Result<(), JsValue> {
    for (index, entry) in items.iter().enumerate() {
        let open = state.is_open(index);
        entry.item.class_list().toggle_with_force(active_class, open)?;
        if let Some(question) = &entry.question {
            utils::set_expanded(question, open)?;
        }
    }
    Ok(())
}

pub struct FaqAccordion {
    state: Rc<Cell<Accordion>>,
    _listeners: Vec<Closure<dyn FnMut()>>,
}

impl FaqAccordion {
    pub fn attach(document: &Document, config: &FaqConfig) -> Result<Option<Self>, JsValue> {
        let mut items = Vec::new();
        for item in utils::query_all(document, config.item_selector)? {
            let question = item.query_selector(config.question_selector)?;
            items.push(FaqItem { item, question });
        }
        if items.is_empty() {
            debug!(selector = config.item_selector, "no faq items");
            return Ok(None);
        }

        let initially_open = items
            .iter()
            .position(|entry| entry.item.class_list().contains(config.active_class));
        let state = Rc::new(Cell::new(Accordion::with_open(items.len(), initially_open)));
        let items = Rc::new(items);
        let active_class = config.active_class;

        let mut listeners = Vec::with_capacity(items.len());
        for (index, entry) in items.iter().enumerate() {
            let question = match &entry.question {
                Some(question) => question,
                None => continue,
            };
            let on_click = {
                let items = items.clone();
                let state = state.clone();
                Closure::wrap(Box::new(move || {
                    let mut next = state.get();
                    next.click(index);
                    state.set(next);
                    let _ = render(&items, &next, active_class);
                }) as Box<dyn FnMut()>)
            };
            question.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            listeners.push(on_click);
        }

        Ok(Some(FaqAccordion {
            state,
            _listeners: listeners,
        }))
    }

    pub fn open(&self) -> Option<usize> {
        self.state.get().open()
    }
}
