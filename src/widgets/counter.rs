// Animated statistics counters.
// When a counter group first comes into view every `[data-target]` element
// inside it counts up from zero to its target with an ease-out curve,
// formatted with Brazilian Portuguese digit grouping.

use super::OneShotObserver;
use crate::config::CounterConfig;
use crate::frame_loop::{FrameLoop, LoopControl};
use crate::utils;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

pub fn ease_out_quad(progress: f64) -> f64 {
    1.0 - (1.0 - progress) * (1.0 - progress)
}

// Leading integer of `text`, read the way a browser's parseInt does:
// leading whitespace and a sign are accepted, parsing stops at the first
// non-digit, and no digits at all means no number.
pub fn parse_target(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

// pt-BR grouping: '.' between every group of three digits
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(digit);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTween {
    target: i64,
    duration_ms: f64,
    start_ms: f64,
}

impl CounterTween {
    pub fn new(target: i64, duration_ms: f64, start_ms: f64) -> Self {
        CounterTween {
            target,
            duration_ms,
            start_ms,
        }
    }

    pub fn frame_at(&self, now_ms: f64) -> CounterFrame {
        if self.duration_ms <= 0.0 {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }
        // frame timestamps can trail the start time slightly
        let progress = ((now_ms - self.start_ms) / self.duration_ms).max(0.0).min(1.0);
        if progress >= 1.0 {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }
        let value = (ease_out_quad(progress) * self.target as f64).floor() as i64;
        CounterFrame { value, done: false }
    }
}

pub struct Counters {
    _observer: OneShotObserver,
    animations: Rc<RefCell<Vec<FrameLoop>>>,
}

impl Counters {
    pub fn attach(document: &Document, config: &CounterConfig) -> Result<Option<Self>, JsValue> {
        let containers = utils::query_all(document, config.container_selector)?;
        if containers.is_empty() {
            debug!(selector = config.container_selector, "no counter groups");
            return Ok(None);
        }

        let animations = Rc::new(RefCell::new(Vec::new()));
        let observer = {
            let animations = animations.clone();
            let config = *config;
            OneShotObserver::observe(&containers, config.threshold, None, move |container| {
                start_group(container, &config, &animations)
            })?
        };

        Ok(Some(Counters {
            _observer: observer,
            animations,
        }))
    }

    // Finished loops are dropped here as well as when the next group starts
    pub fn running(&self) -> usize {
        let mut animations = self.animations.borrow_mut();
        animations.retain(|animation| animation.is_running());
        animations.len()
    }
}

fn start_group(
    container: &Element,
    config: &CounterConfig,
    animations: &RefCell<Vec<FrameLoop>>,
) -> Result<(), JsValue> {
    let start_ms = utils::window()?
        .performance()
        .map(|p| p.now())
        .unwrap_or(0.0);
    let selector = format!("[{}]", config.target_attribute);

    let mut animations = animations.borrow_mut();
    animations.retain(|animation| animation.is_running());
    for counter in utils::query_all(container, &selector)? {
        let target = match counter
            .get_attribute(config.target_attribute)
            .as_deref()
            .and_then(parse_target)
        {
            Some(target) => target,
            None => {
                debug!("counter target is not a number");
                continue;
            }
        };

        let tween = CounterTween::new(target, config.duration_ms, start_ms);
        animations.push(FrameLoop::start(move |now_ms| {
            let frame = tween.frame_at(now_ms);
            counter.set_text_content(Some(&format_grouped(frame.value)));
            if frame.done {
                LoopControl::Stop
            } else {
                LoopControl::Continue
            }
        })?);
    }
    Ok(())
}
