// Trailing-edge debounce.
// Every trigger records its time, cancels whatever action is still pending
// and schedules a fresh one `quiet_ms` later, so the action only runs once
// the triggers have gone quiet for that long.

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub trait TimerHost {
    type Handle;

    fn now_ms(&self) -> f64;

    fn schedule(&self, delay_ms: u32, action: Rc<dyn Fn()>) -> Result<Self::Handle, JsValue>;

    fn cancel(&self, handle: Self::Handle);
}

pub struct Debounce<T: TimerHost> {
    host: T,
    quiet_ms: u32,
    action: Rc<dyn Fn()>,
    last_trigger: Option<f64>,
    pending: Option<T::Handle>,
}

impl<T: TimerHost> Debounce<T> {
    pub fn new<F>(host: T, quiet_ms: u32, action: F) -> Self
    where
        F: Fn() + 'static,
    {
        Debounce {
            host,
            quiet_ms,
            action: Rc::new(action),
            last_trigger: None,
            pending: None,
        }
    }

    pub fn trigger(&mut self) -> Result<(), JsValue> {
        self.last_trigger = Some(self.host.now_ms());
        if let Some(handle) = self.pending.take() {
            self.host.cancel(handle);
        }
        self.pending = Some(self.host.schedule(self.quiet_ms, self.action.clone())?);
        Ok(())
    }

    // Drops the pending action without running it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel(handle);
        }
    }

    pub fn last_trigger(&self) -> Option<f64> {
        self.last_trigger
    }
}

// setTimeout/clearTimeout on the browser window. The closure for a timeout
// lives in its handle and is freed when the handle is cancelled or replaced.
pub struct WindowTimers {
    window: Window,
}

pub struct PendingTimeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl WindowTimers {
    pub fn new(window: Window) -> Self {
        WindowTimers { window }
    }
}

impl TimerHost for WindowTimers {
    type Handle = PendingTimeout;

    fn now_ms(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn schedule(&self, delay_ms: u32, action: Rc<dyn Fn()>) -> Result<PendingTimeout, JsValue> {
        let callback = Closure::wrap(Box::new(move || action()) as Box<dyn FnMut()>);
        let id = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms as i32,
        )?;
        Ok(PendingTimeout {
            id,
            _callback: callback,
        })
    }

    fn cancel(&self, handle: PendingTimeout) {
        self.window.clear_timeout_with_handle(handle.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    // Timers driven by a hand-advanced clock
    #[derive(Default)]
    struct Clock {
        now: Cell<f64>,
        next_id: Cell<u32>,
        queue: RefCell<Vec<(u32, f64, Rc<dyn Fn()>)>>,
    }

    #[derive(Clone, Default)]
    struct ManualTimers(Rc<Clock>);

    impl ManualTimers {
        fn now(&self) -> f64 {
            self.0.now.get()
        }

        fn pending(&self) -> usize {
            self.0.queue.borrow().len()
        }

        fn advance_to(&self, target: f64) {
            loop {
                let due = {
                    let mut queue = self.0.queue.borrow_mut();
                    queue.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
                    match queue.first() {
                        Some(&(_, deadline, _)) if deadline <= target => Some(queue.remove(0)),
                        _ => None,
                    }
                };
                match due {
                    Some((_, deadline, action)) => {
                        self.0.now.set(deadline);
                        action();
                    }
                    None => break,
                }
            }
            self.0.now.set(target);
        }
    }

    impl TimerHost for ManualTimers {
        type Handle = u32;

        fn now_ms(&self) -> f64 {
            self.now()
        }

        fn schedule(&self, delay_ms: u32, action: Rc<dyn Fn()>) -> Result<u32, JsValue> {
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            let deadline = self.now() + delay_ms as f64;
            self.0.queue.borrow_mut().push((id, deadline, action));
            Ok(id)
        }

        fn cancel(&self, handle: u32) {
            self.0.queue.borrow_mut().retain(|(id, _, _)| *id != handle);
        }
    }

    fn counting_debounce(timers: &ManualTimers) -> (Debounce<ManualTimers>, Rc<RefCell<Vec<f64>>>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let log = fired.clone();
        let clock = timers.clone();
        let debounce = Debounce::new(timers.clone(), 200, move || {
            log.borrow_mut().push(clock.now());
        });
        (debounce, fired)
    }

    #[test]
    fn burst_of_triggers_fires_once_after_quiet_period() {
        let timers = ManualTimers::default();
        let (mut debounce, fired) = counting_debounce(&timers);

        for i in 0..10 {
            timers.advance_to(i as f64 * 5.0);
            debounce.trigger().unwrap();
        }
        assert_eq!(debounce.last_trigger(), Some(45.0));

        timers.advance_to(244.0);
        assert!(fired.borrow().is_empty());

        timers.advance_to(245.0);
        assert_eq!(*fired.borrow(), vec![245.0]);

        timers.advance_to(5000.0);
        assert_eq!(fired.borrow().len(), 1);
    }

    #[test]
    fn separated_triggers_each_fire() {
        let timers = ManualTimers::default();
        let (mut debounce, fired) = counting_debounce(&timers);

        debounce.trigger().unwrap();
        timers.advance_to(300.0);
        debounce.trigger().unwrap();
        timers.advance_to(1000.0);

        assert_eq!(*fired.borrow(), vec![200.0, 500.0]);
    }

    #[test]
    fn only_one_action_is_ever_pending() {
        let timers = ManualTimers::default();
        let (mut debounce, _fired) = counting_debounce(&timers);
        for _ in 0..25 {
            debounce.trigger().unwrap();
        }
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn cancel_discards_pending_action() {
        let timers = ManualTimers::default();
        let (mut debounce, fired) = counting_debounce(&timers);
        debounce.trigger().unwrap();
        debounce.cancel();
        debounce.cancel();
        assert_eq!(timers.pending(), 0);

        timers.advance_to(1000.0);
        assert!(fired.borrow().is_empty());
        assert_eq!(debounce.last_trigger(), Some(0.0));
    }
}
