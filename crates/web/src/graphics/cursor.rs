// =============================================================================
// Aarohan Web - Custom Cursor
// =============================================================================
// A dot that tracks the pointer and a ring that eases after it. Not shown on
// touch devices.
// =============================================================================

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use gloo_events::EventListener;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::animation::AnimationLoop;

/// Fraction of the remaining distance the ring covers per 60 Hz frame.
const FOLLOW_RATE: f32 = 0.18;

/// Frame-rate independent easing factor for a step of `delta` seconds.
pub fn follow_factor(delta: f64) -> f32 {
    1.0 - (1.0 - FOLLOW_RATE).powf(delta as f32 * 60.0)
}

fn place(element: &HtmlElement, at: Vec2) {
    let _ = element
        .style()
        .set_property("transform", &format!("translate3d({:.1}px, {:.1}px, 0)", at.x, at.y));
}

fn is_coarse_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

struct MountedCursor {
    _frame_loop: AnimationLoop,
    _moves: EventListener,
}

impl MountedCursor {
    fn mount(dot: HtmlElement, ring: HtmlElement) -> Option<Self> {
        let window = web_sys::window()?;
        let target = Rc::new(Cell::new(None::<Vec2>));

        let moves = {
            let target = Rc::clone(&target);
            let dot = dot.clone();
            EventListener::new(&window, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let at = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                    target.set(Some(at));
                    place(&dot, at);
                }
            })
        };

        let ring_at = Cell::new(None::<Vec2>);
        let frame_loop = AnimationLoop::start(move |time| {
            // Stay hidden until the first mouse move
            let Some(goal) = target.get() else {
                return;
            };
            let current = ring_at.get().unwrap_or(goal);
            let next = current.lerp(goal, follow_factor(time.delta));
            ring_at.set(Some(next));
            place(&ring, next);
            let _ = ring.class_list().add_1("active");
            let _ = dot.class_list().add_1("active");
        });

        Some(Self {
            _frame_loop: frame_loop,
            _moves: moves,
        })
    }
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let dot_ref = NodeRef::<html::Div>::new();
    let ring_ref = NodeRef::<html::Div>::new();
    let mounted = StoredValue::new_local(None::<MountedCursor>);
    let enabled = !is_coarse_pointer();

    Effect::new(move |_| {
        if !enabled || mounted.with_value(Option::is_some) {
            return;
        }
        if let (Some(dot), Some(ring)) = (dot_ref.get(), ring_ref.get()) {
            mounted.set_value(MountedCursor::mount(dot.into(), ring.into()));
        }
    });

    on_cleanup(move || {
        mounted.try_update_value(|cursor| cursor.take());
    });

    enabled.then(|| {
        view! {
            <div node_ref=ring_ref class="cursor-ring" aria-hidden="true"></div>
            <div node_ref=dot_ref class="cursor-dot" aria-hidden="true"></div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_time_no_motion() {
        assert_eq!(follow_factor(0.0), 0.0);
    }

    #[test]
    fn one_frame_at_60hz_uses_base_rate() {
        assert!((follow_factor(1.0 / 60.0) - FOLLOW_RATE).abs() < 1e-5);
    }

    #[test]
    fn long_steps_approach_the_target() {
        let f = follow_factor(1.0);
        assert!(f > 0.99 && f <= 1.0);
    }
}
