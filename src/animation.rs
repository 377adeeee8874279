//! Entrance animations. The motion itself is CSS (`.reveal` / `.is-visible`
//! in the page stylesheet); this module only decides when an element flips
//! to visible and how long each child waits.

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Fires the first time an element is visible enough and never again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, revealed: false }
    }

    /// Feed the currently visible ratio. Returns true only on the call that
    /// reveals the element.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.revealed || visible_ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u32,
    pub duration_ms: u32,
}

impl Stagger {
    pub const HERO: Stagger = Stagger {
        step_ms: config::STAGGER_STEP_MS,
        duration_ms: config::FADE_DURATION_MS,
    };

    pub fn delay_ms(&self, index: usize) -> u32 {
        self.step_ms.saturating_mul(index as u32)
    }

    /// Inline style for the `index`-th child of a staggered group.
    pub fn style(&self, index: usize) -> String {
        format!(
            "transition-delay: {}ms; transition-duration: {}ms;",
            self.delay_ms(index),
            self.duration_ms
        )
    }
}

/// Flips to true one frame after mount so the CSS transition has a starting
/// state to animate from.
#[hook]
pub fn use_reveal_on_mount() -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(16, move || revealed.set(true));
                move || drop(timeout)
            },
            (),
        );
    }
    *revealed
}

/// True once the referenced element has been at least `threshold` visible.
/// Leaving and re-entering the viewport afterwards changes nothing.
#[hook]
pub fn use_reveal_on_view(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, threshold, revealed.setter()));
                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }
    *revealed
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    threshold: f64,
    revealed: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let mut latch = RevealLatch::new(threshold);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if latch.observe(entry.intersection_ratio()) {
                debug!("Revealing {} on first view", entry.target().id());
                revealed.set(true);
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_across_repeated_entries() {
        let mut latch = RevealLatch::new(config::REVEAL_THRESHOLD);
        let fired: Vec<bool> = [0.0, 0.5, 0.0, 0.9, 0.1, 1.0]
            .into_iter()
            .map(|ratio| latch.observe(ratio))
            .collect();
        assert_eq!(fired, [false, true, false, false, false, false]);
    }

    #[test]
    fn latch_waits_for_the_threshold() {
        let mut latch = RevealLatch::new(0.3);
        assert!(!latch.observe(0.1));
        assert!(!latch.observe(0.29));
        assert!(latch.observe(0.3));
    }

    #[test]
    fn hero_children_are_staggered_by_80ms() {
        let stagger = Stagger::HERO;
        let delays: Vec<u32> = (0..4).map(|i| stagger.delay_ms(i)).collect();
        assert_eq!(delays, [0, 80, 160, 240]);
        assert_eq!(
            stagger.style(2),
            "transition-delay: 160ms; transition-duration: 600ms;"
        );
    }
}
