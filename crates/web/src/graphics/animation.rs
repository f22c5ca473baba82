// =============================================================================
// Aarohan Web - Animation Loop
// =============================================================================
// A requestAnimationFrame loop that stops for good when dropped.
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use gloo_render::{request_animation_frame, AnimationFrame};

/// Longest step handed to a frame callback, in seconds. Keeps motion sane
/// after the tab was in the background.
pub const MAX_FRAME_DELTA: f64 = 0.1;

/// Timing for one animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the loop started.
    pub elapsed: f64,
    /// Seconds since the previous frame, clamped to `MAX_FRAME_DELTA`.
    pub delta: f64,
}

impl FrameTime {
    /// Timing for a frame at `timestamp_ms`, given the first and previous stamps.
    pub fn between(start_ms: f64, previous_ms: Option<f64>, timestamp_ms: f64) -> Self {
        let delta = previous_ms
            .map(|prev| ((timestamp_ms - prev) / 1000.0).clamp(0.0, MAX_FRAME_DELTA))
            .unwrap_or(0.0);
        Self {
            elapsed: ((timestamp_ms - start_ms) / 1000.0).max(0.0),
            delta,
        }
    }
}

/// Per-frame input for a scene: time plus the normalised pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    pub time: FrameTime,
    /// Pointer in `[-1, 1]` on both axes, `+y` up. Zero when parallax is off.
    pub pointer: Vec2,
}

/// Map a client-space pointer position to `[-1, 1]`, `+y` up.
pub fn normalize_pointer(x: f64, y: f64, width: f64, height: f64) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let nx = (x / width) * 2.0 - 1.0;
    let ny = 1.0 - (y / height) * 2.0;
    Vec2::new(nx as f32, ny as f32).clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
}

struct LoopState {
    running: Cell<bool>,
    frame: RefCell<Option<AnimationFrame>>,
    start_ms: Cell<Option<f64>>,
    last_ms: Cell<Option<f64>>,
    tick: RefCell<Box<dyn FnMut(FrameTime)>>,
}

/// Calls `tick` on every display refresh until dropped or stopped.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start(tick: impl FnMut(FrameTime) + 'static) -> Self {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            frame: RefCell::new(None),
            start_ms: Cell::new(None),
            last_ms: Cell::new(None),
            tick: RefCell::new(Box::new(tick)),
        });
        schedule(&state);
        Self { state }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Cancel the pending frame. No further ticks run.
    pub fn stop(&self) {
        self.state.running.set(false);
        self.state.frame.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(state: &Rc<LoopState>) {
    let next = Rc::clone(state);
    let handle = request_animation_frame(move |timestamp| run_frame(&next, timestamp));
    *state.frame.borrow_mut() = Some(handle);
}

fn run_frame(state: &Rc<LoopState>, timestamp: f64) {
    state.frame.borrow_mut().take();
    if !state.running.get() {
        return;
    }

    let start = match state.start_ms.get() {
        Some(start) => start,
        None => {
            state.start_ms.set(Some(timestamp));
            timestamp
        }
    };
    let time = FrameTime::between(start, state.last_ms.get(), timestamp);
    state.last_ms.set(Some(timestamp));

    (state.tick.borrow_mut())(time);

    // The tick may have stopped the loop
    if state.running.get() {
        schedule(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_no_delta() {
        let time = FrameTime::between(1000.0, None, 1000.0);
        assert_eq!(time, FrameTime { elapsed: 0.0, delta: 0.0 });
    }

    #[test]
    fn delta_is_clamped_after_a_stall() {
        let time = FrameTime::between(0.0, Some(16.0), 5016.0);
        assert_eq!(time.delta, MAX_FRAME_DELTA);
        assert!((time.elapsed - 5.016).abs() < 1e-9);
    }

    #[test]
    fn pointer_is_normalised_with_y_up() {
        assert_eq!(normalize_pointer(0.0, 0.0, 200.0, 100.0), Vec2::new(-1.0, 1.0));
        assert_eq!(normalize_pointer(100.0, 50.0, 200.0, 100.0), Vec2::ZERO);
        assert_eq!(normalize_pointer(400.0, 100.0, 200.0, 100.0), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn degenerate_viewport_gives_centered_pointer() {
        assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 0.0), Vec2::ZERO);
    }
}
