use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom;
use crate::observe::OneShotObserver;

pub const STATS_SELECTOR: &str = ".stats";
pub const NUMBER_SELECTOR: &str = ".number";

/// A single animated number: counts from zero up to `target` over `duration_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub target: i64,
    pub plus_suffix: bool,
    pub duration_ms: f64,
}

impl CounterSpec {
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        (self.target as f64 * self.progress(elapsed_ms)).floor() as i64
    }

    pub fn label_at(&self, elapsed_ms: f64) -> String {
        let value = self.value_at(elapsed_ms);
        if self.plus_suffix {
            format!("{}+", value)
        } else {
            value.to_string()
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Label to paint for this frame and whether another frame is needed.
    pub fn frame(&self, elapsed_ms: f64) -> (String, bool) {
        (self.label_at(elapsed_ms), !self.is_finished(elapsed_ms))
    }
}

/// Parses a `data-target` value the way the browser's `parseInt(value, 10)` does:
/// optional whitespace and sign, then as many digits as are present.
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

fn spec_for(element: &Element, duration_ms: f64) -> Option<CounterSpec> {
    let raw = element.get_attribute("data-target").unwrap_or_default();
    let Some(target) = parse_target(&raw) else {
        log::warn!("Skipping counter with unreadable data-target {:?}", raw);
        return None;
    };
    Some(CounterSpec {
        target,
        plus_suffix: element
            .get_attribute("data-plus")
            .map_or(false, |v| !v.is_empty()),
        duration_ms,
    })
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Drives one counter with `requestAnimationFrame` until its duration has elapsed.
fn run(element: Element, spec: CounterSpec) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let started = now_ms();

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_handle = frame.clone();
    let window_loop = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let (label, more) = spec.frame(now - started);
        element.set_text_content(Some(&label));
        if !more {
            // Break the self reference so the closure is freed.
            let _ = frame_handle.borrow_mut().take();
            return;
        }
        if let Some(callback) = frame_handle.borrow().as_ref() {
            let _ = window_loop.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    let first = frame.borrow();
    if let Some(callback) = first.as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Starts the counters inside each `.stats` section the first time it is in view.
pub fn attach(document: &Document, threshold: f64, duration_ms: f64) -> Option<OneShotObserver> {
    let sections = dom::query_all(document, STATS_SELECTOR);
    OneShotObserver::new(&sections, threshold, move |section| {
        for number in dom::query_all_within(section, NUMBER_SELECTOR) {
            if let Some(spec) = spec_for(&number, duration_ms) {
                run(number, spec);
            }
        }
    })
}
