// Wires the particle field to the page: a canvas renderer, a frame loop that
// never stops, and a debounced reseed whenever the window is resized.

use crate::debounce::{Debounce, WindowTimers};
use crate::field::{FieldConfig, ParticleField};
use crate::frame_loop::{FrameLoop, LoopControl};
use crate::renderer::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

pub struct Background {
    field: Rc<RefCell<ParticleField<Renderer>>>,
    frames: FrameLoop,
    window: Window,
    resize: Rc<RefCell<Debounce<WindowTimers>>>,
    on_resize: Closure<dyn FnMut()>,
}

impl Background {
    // Ok(None) leaves the page without a background when there is no usable canvas
    pub fn attach(
        window: &Window,
        document: &Document,
        canvas_id: &str,
        config: FieldConfig,
    ) -> Result<Option<Self>, JsValue> {
        let canvas = match document
            .get_element_by_id(canvas_id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => {
                debug!(canvas_id, "particle canvas not found");
                return Ok(None);
            }
        };
        let renderer = match Renderer::new(canvas)? {
            Some(renderer) => renderer,
            None => return Ok(None),
        };

        let mut field = ParticleField::new(renderer, config);
        field.measure();
        field.seed();
        let (width, height) = field.dimensions();
        let field = Rc::new(RefCell::new(field));

        let frames = {
            let field = field.clone();
            FrameLoop::start(move |_timestamp| {
                field.borrow_mut().render_frame();
                LoopControl::Continue
            })?
        };

        let resize = {
            let field = field.clone();
            Rc::new(RefCell::new(Debounce::new(
                WindowTimers::new(window.clone()),
                config.resize_quiet_ms,
                move || field.borrow_mut().on_resize(),
            )))
        };
        let on_resize = {
            let resize = resize.clone();
            Closure::wrap(Box::new(move || {
                if let Err(err) = resize.borrow_mut().trigger() {
                    warn!(error = ?err, "failed to schedule particle reseed");
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        info!(
            particles = config.particle_count,
            width, height, "particle background running"
        );
        Ok(Some(Background {
            field,
            frames,
            window: window.clone(),
            resize,
            on_resize,
        }))
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles().len()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.field.borrow().dimensions()
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        self.resize.borrow_mut().cancel();
    }
}
