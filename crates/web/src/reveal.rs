// =============================================================================
// Aarohan Web - Reveal on Scroll
// =============================================================================
// Table of Contents:
// 1. Options
// 2. Viewport Geometry
// 3. Controller
// 4. Hook
// =============================================================================
//
// Elements tagged with the reveal class start hidden (see style.css) and get
// the `visible` class the first time they scroll into view. The class is
// never removed.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Class added to an element once it has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Attribute holding a per-element reveal delay in milliseconds.
pub const DELAY_ATTRIBUTE: &str = "data-reveal-delay";

// -----------------------------------------------------------------------------
// 1. Options
// -----------------------------------------------------------------------------

/// Reveal controller settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// CSS selector for elements to watch.
    pub selector: &'static str,
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Shrinks the viewport from the bottom so reveals fire slightly early.
    pub bottom_margin_px: f64,
    /// Delay before the manual check for elements already in view.
    pub recheck_delay_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: ".reveal",
            threshold: 0.1,
            bottom_margin_px: 50.0,
            recheck_delay_ms: 300,
        }
    }
}

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

// -----------------------------------------------------------------------------
// 2. Viewport Geometry
// -----------------------------------------------------------------------------

/// Fraction of an element's height inside the (margin-reduced) viewport.
pub fn intersection_ratio(top: f64, height: f64, viewport_height: f64, bottom_margin: f64) -> f64 {
    let visible_bottom = (viewport_height - bottom_margin).max(0.0);
    let bottom = top + height;

    if height <= 0.0 {
        // Zero-height elements count as fully visible when inside the band
        return if top >= 0.0 && top <= visible_bottom { 1.0 } else { 0.0 };
    }

    let overlap = bottom.min(visible_bottom) - top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

/// Whether an element with `ratio` visible should be revealed.
pub fn is_revealable(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio >= threshold
}

/// Parse a `data-reveal-delay` value.
pub fn parse_delay(raw: &str) -> Option<u32> {
    raw.trim().trim_end_matches("ms").parse().ok()
}

/// Mark an element revealed. Returns false if it already was or the class
/// could not be added.
pub fn reveal_element(element: &Element) -> bool {
    let classes = element.class_list();
    if classes.contains(VISIBLE_CLASS) {
        return false;
    }
    classes.add_1(VISIBLE_CLASS).is_ok()
}

// -----------------------------------------------------------------------------
// 3. Controller
// -----------------------------------------------------------------------------

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches tagged elements until dropped.
///
/// Dropping the controller unobserves every element, disconnects the
/// observer and cancels the pending re-check.
pub struct RevealController {
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
    targets: Vec<Element>,
    _recheck: Option<Timeout>,
}

impl RevealController {
    /// Start watching every element under `document` matching the selector.
    pub fn attach(document: &Document, options: &RevealOptions) -> Self {
        let targets = collect_targets(document, options.selector);
        for target in &targets {
            apply_delay(target);
        }

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        reveal_element(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    for target in &targets {
                        observer.observe(target);
                    }
                    Some(observer)
                }
                Err(err) => {
                    log::warn!("IntersectionObserver unavailable, reveals disabled: {:?}", err);
                    None
                }
            };

        let recheck = observer.as_ref().map(|_| {
            let pending = targets.clone();
            let options = *options;
            Timeout::new(options.recheck_delay_ms, move || {
                let revealed = reveal_in_view(&pending, &options);
                log::debug!("Reveal re-check: {} already in view", revealed);
            })
        });

        log::debug!(
            "Reveal controller attached to {} element(s) matching `{}`",
            targets.len(),
            options.selector
        );

        Self {
            observer,
            _callback: Some(callback),
            targets,
            _recheck: recheck,
        }
    }

    /// Number of watched elements.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            for target in &self.targets {
                observer.unobserve(target);
            }
            observer.disconnect();
        }
        log::debug!("Reveal controller detached");
    }
}

fn collect_targets(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("Invalid reveal selector `{}`", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn apply_delay(element: &Element) {
    let Some(delay) = element
        .get_attribute(DELAY_ATTRIBUTE)
        .as_deref()
        .and_then(parse_delay)
    else {
        return;
    };
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html
            .style()
            .set_property("transition-delay", &format!("{}ms", delay));
    }
}

/// Reveal every target currently inside the viewport. Returns how many were new.
fn reveal_in_view(targets: &[Element], options: &RevealOptions) -> usize {
    let Some(viewport_height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return 0;
    };

    targets
        .iter()
        .filter(|el| {
            let rect = el.get_bounding_client_rect();
            let ratio = intersection_ratio(
                rect.top(),
                rect.height(),
                viewport_height,
                options.bottom_margin_px,
            );
            is_revealable(ratio, options.threshold)
        })
        .filter(|el| reveal_element(el))
        .count()
}

// -----------------------------------------------------------------------------
// 4. Hook
// -----------------------------------------------------------------------------

/// Attach a reveal controller for the lifetime of the calling component.
pub fn use_reveal(options: RevealOptions) {
    let controller = StoredValue::new_local(None::<RevealController>);

    // Effects run after the component's view is in the DOM
    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            controller.set_value(Some(RevealController::attach(&document, &options)));
        }
    });

    on_cleanup(move || {
        controller.try_update_value(|c| c.take());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margin_reveals_early() {
        let options = RevealOptions::default();
        assert_eq!(options.root_margin(), "0px 0px -50px 0px");
        assert_eq!(options.recheck_delay_ms, 300);
    }

    #[test]
    fn fully_inside_is_ratio_one() {
        assert_eq!(intersection_ratio(100.0, 200.0, 800.0, 50.0), 1.0);
    }

    #[test]
    fn below_the_fold_is_hidden() {
        assert_eq!(intersection_ratio(900.0, 200.0, 800.0, 50.0), 0.0);
        // Inside the viewport but within the bottom margin
        assert_eq!(intersection_ratio(760.0, 200.0, 800.0, 50.0), 0.0);
    }

    #[test]
    fn partial_overlap_uses_margin() {
        // Visible band is 0..750; element spans 700..900
        let ratio = intersection_ratio(700.0, 200.0, 800.0, 50.0);
        assert!((ratio - 0.25).abs() < 1e-9);
        assert!(is_revealable(ratio, 0.1));
        assert!(!is_revealable(0.05, 0.1));
    }

    #[test]
    fn scrolled_past_is_hidden() {
        assert_eq!(intersection_ratio(-400.0, 200.0, 800.0, 50.0), 0.0);
    }

    #[test]
    fn zero_threshold_still_needs_overlap() {
        assert!(!is_revealable(0.0, 0.0));
        assert!(is_revealable(0.01, 0.0));
    }

    #[test]
    fn delays_parse_with_or_without_unit() {
        assert_eq!(parse_delay("200"), Some(200));
        assert_eq!(parse_delay(" 150ms "), Some(150));
        assert_eq!(parse_delay("soon"), None);
    }
}
