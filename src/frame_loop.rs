// Owned requestAnimationFrame loop. The callback runs once per display frame
// until it returns LoopControl::Stop or the handle is stopped/dropped.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

struct LoopState {
    running: Cell<bool>,
    pending_frame: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
    fn request_frame(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let callback = self.callback.borrow();
        if let Some(callback) = callback.as_ref() {
            let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
            self.pending_frame.set(Some(id));
        }
        Ok(())
    }
}

pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    // The first frame is requested before this returns
    pub fn start<F>(mut on_frame: F) -> Result<FrameLoop, JsValue>
    where
        F: FnMut(f64) -> LoopControl + 'static,
    {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            pending_frame: Cell::new(None),
            callback: RefCell::new(None),
        });

        // Weak so the closure stored inside the state doesn't keep it alive
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let state = match weak.upgrade() {
                Some(state) => state,
                None => return,
            };
            state.pending_frame.set(None);
            if !state.running.get() {
                return;
            }
            if on_frame(timestamp) == LoopControl::Stop {
                state.running.set(false);
                return;
            }
            if let Err(err) = state.request_frame() {
                warn!(error = ?err, "failed to schedule animation frame");
                state.running.set(false);
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(callback);

        state.request_frame()?;
        Ok(FrameLoop { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.pending_frame.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
