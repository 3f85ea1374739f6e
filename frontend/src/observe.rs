//! Viewport intersection plumbing shared by the reveal, counter and hero video
//! behaviours.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Remembers which targets already fired. Firing is monotonic: once a target is
/// in the set it never leaves.
#[derive(Debug)]
pub struct OneShotSet<T> {
    fired: Vec<T>,
}

impl<T: PartialEq> OneShotSet<T> {
    pub fn new() -> Self {
        Self { fired: Vec::new() }
    }

    /// Returns true the first time `target` is seen, false on every later call.
    pub fn fire(&mut self, target: &T) -> bool
    where
        T: Clone,
    {
        if self.has_fired(target) {
            return false;
        }
        self.fired.push(target.clone());
        true
    }

    pub fn has_fired(&self, target: &T) -> bool {
        self.fired.iter().any(|t| t == target)
    }
}

impl<T: PartialEq> Default for OneShotSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn entries(batch: &Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    batch
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
}

fn new_observer(threshold: f64, callback: &EntryCallback) -> Option<IntersectionObserver> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => Some(observer),
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Runs a handler once per element, the first time it intersects the viewport,
/// then stops observing that element.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl OneShotObserver {
    pub fn new<F>(targets: &[Element], threshold: f64, mut on_first_visible: F) -> Option<Self>
    where
        F: FnMut(&Element) + 'static,
    {
        if targets.is_empty() {
            return None;
        }

        let fired = Rc::new(RefCell::new(OneShotSet::<Element>::new()));
        let callback: EntryCallback = Closure::wrap(Box::new(
            move |batch: Array, observer: IntersectionObserver| {
                for entry in entries(&batch) {
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    if fired.borrow_mut().fire(&target) {
                        on_first_visible(&target);
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = new_observer(threshold, &callback)?;
        for target in targets {
            observer.observe(target);
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reports the visible ratio of an element on every intersection change.
pub struct RatioObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl RatioObserver {
    pub fn new<F>(target: &Element, threshold: f64, mut on_change: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let callback: EntryCallback = Closure::wrap(Box::new(
            move |batch: Array, _observer: IntersectionObserver| {
                for entry in entries(&batch) {
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    on_change(ratio);
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = new_observer(threshold, &callback)?;
        observer.observe(target);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RatioObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_target() {
        let mut set = OneShotSet::new();
        assert!(set.fire(&"stats"));
        assert!(!set.fire(&"stats"));
        assert!(!set.fire(&"stats"));
        assert_eq!(set.fired.len(), 1);
    }

    #[test]
    fn targets_fire_independently_in_arrival_order() {
        let mut set = OneShotSet::new();
        let arrivals = [3, 1, 3, 2, 1, 3];
        let fired: Vec<i32> = arrivals.iter().copied().filter(|t| set.fire(t)).collect();
        assert_eq!(fired, vec![3, 1, 2]);
        assert!(set.has_fired(&2));
        assert!(!set.has_fired(&4));
    }
}
