// =============================================================================
// Aarohan Web - Particle Field
// =============================================================================
// Table of Contents:
// 1. Random Source
// 2. Particle System
// 3. ParticleField Component
// =============================================================================

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use gloo_events::EventListener;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::animation::AnimationLoop;
use crate::error::GraphicsError;

/// Particles closer than this are joined by a line.
pub const LINK_DISTANCE: f32 = 120.0;

// -----------------------------------------------------------------------------
// 1. Random Source
// -----------------------------------------------------------------------------

/// Small xorshift generator; layout only needs to look random.
#[derive(Clone, Debug)]
pub struct Xorshift(u64);

impl Xorshift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Uniform in `[0, 1]`.
    pub fn next_f32(&mut self) -> f32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x as f64 / u64::MAX as f64) as f32
    }

    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }
}

// -----------------------------------------------------------------------------
// 2. Particle System
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per second.
    pub velocity: Vec2,
    pub radius: f32,
}

/// Drifting particles that wrap around the field edges.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    size: Vec2,
}

/// Particle count for a field of the given size.
pub fn particle_count(width: f32, height: f32) -> usize {
    ((width * height / 12_000.0) as usize).clamp(20, 120)
}

impl ParticleSystem {
    pub fn new(width: f32, height: f32, rng: &mut Xorshift) -> Self {
        let count = particle_count(width, height);
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
                velocity: Vec2::new(rng.range(-20.0, 20.0), rng.range(-20.0, 20.0)),
                radius: rng.range(1.0, 2.5),
            })
            .collect();
        Self {
            particles,
            size: Vec2::new(width, height),
        }
    }

    /// Keep particles inside a resized field.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.wrap();
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.position += p.velocity * dt;
        }
        self.wrap();
    }

    fn wrap(&mut self) {
        let size = self.size.max(Vec2::ONE);
        for p in &mut self.particles {
            p.position.x = p.position.x.rem_euclid(size.x);
            p.position.y = p.position.y.rem_euclid(size.y);
        }
    }

    /// Pairs closer than `max_distance`, with line opacity fading by distance.
    pub fn links(&self, max_distance: f32) -> Vec<(usize, usize, f32)> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = a.position.distance(b.position);
                if distance < max_distance {
                    links.push((i, j, 1.0 - distance / max_distance));
                }
            }
        }
        links
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) {
        ctx.clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);

        ctx.set_line_width(1.0);
        for (i, j, alpha) in self.links(LINK_DISTANCE) {
            let (a, b) = (self.particles[i].position, self.particles[j].position);
            ctx.set_stroke_style_str(&format!("rgba(245, 166, 35, {:.3})", alpha * 0.35));
            ctx.begin_path();
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.stroke();
        }

        ctx.set_fill_style_str("rgba(255, 236, 200, 0.8)");
        for p in &self.particles {
            ctx.begin_path();
            let _ = ctx.arc(p.position.x as f64, p.position.y as f64, p.radius as f64, 0.0, TAU);
            ctx.fill();
        }
    }
}

// -----------------------------------------------------------------------------
// 3. ParticleField Component
// -----------------------------------------------------------------------------

struct FieldState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    system: ParticleSystem,
}

impl FieldState {
    fn fit(&mut self) {
        let width = self.canvas.client_width().max(1) as u32;
        let height = self.canvas.client_height().max(1) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.system.resize(width as f32, height as f32);
    }
}

/// Running particle animation; dropping it stops everything.
struct MountedField {
    _frame_loop: AnimationLoop,
    _resize: EventListener,
}

impl MountedField {
    fn mount(canvas: HtmlCanvasElement) -> Result<Self, GraphicsError> {
        let window = web_sys::window().ok_or(GraphicsError::NoWindow)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(GraphicsError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GraphicsError::ContextUnavailable)?;

        let width = canvas.client_width().max(1) as f32;
        let height = canvas.client_height().max(1) as f32;
        let mut rng = Xorshift::new(js_sys::Date::now() as u64);
        let state = Rc::new(RefCell::new(FieldState {
            canvas,
            ctx,
            system: ParticleSystem::new(width, height, &mut rng),
        }));
        state.borrow_mut().fit();

        let resize = {
            let state = Rc::clone(&state);
            EventListener::new(&window, "resize", move |_| {
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.fit();
                }
            })
        };

        let frame_loop = AnimationLoop::start(move |time| {
            let mut state = state.borrow_mut();
            state.system.step(time.delta as f32);
            state.system.draw(&state.ctx);
        });

        Ok(Self {
            _frame_loop: frame_loop,
            _resize: resize,
        })
    }
}

/// Full-bleed particle background.
#[component]
pub fn ParticleField(#[prop(optional, into)] class: String) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let mounted = StoredValue::new_local(None::<MountedField>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if mounted.with_value(Option::is_some) {
            return;
        }
        match MountedField::mount(canvas) {
            Ok(field) => mounted.set_value(Some(field)),
            Err(err) => log::warn!("Particle field disabled: {}", err),
        }
    });

    on_cleanup(move || {
        mounted.try_update_value(|field| field.take());
    });

    view! {
        <canvas node_ref=canvas_ref class=format!("particle-field {}", class) aria-hidden="true"></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_with(points: &[(f32, f32)]) -> ParticleSystem {
        ParticleSystem {
            particles: points
                .iter()
                .map(|&(x, y)| Particle {
                    position: Vec2::new(x, y),
                    velocity: Vec2::ZERO,
                    radius: 1.0,
                })
                .collect(),
            size: Vec2::new(400.0, 300.0),
        }
    }

    #[test]
    fn rng_stays_in_unit_range() {
        let mut rng = Xorshift::new(42);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = ParticleSystem::new(800.0, 600.0, &mut Xorshift::new(7));
        let b = ParticleSystem::new(800.0, 600.0, &mut Xorshift::new(7));
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.particles.len(), particle_count(800.0, 600.0));
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(particle_count(10.0, 10.0), 20);
        assert_eq!(particle_count(10_000.0, 10_000.0), 120);
    }

    #[test]
    fn particles_wrap_around_edges() {
        let mut system = system_with(&[(395.0, 5.0)]);
        system.particles[0].velocity = Vec2::new(10.0, -10.0);
        system.step(1.0);
        let p = system.particles[0].position;
        assert!((p.x - 5.0).abs() < 1e-4);
        assert!((p.y - 295.0).abs() < 1e-4);
    }

    #[test]
    fn links_fade_with_distance() {
        let system = system_with(&[(0.0, 0.0), (60.0, 0.0), (300.0, 0.0)]);
        let links = system.links(120.0);
        assert_eq!(links.len(), 1);
        let (i, j, alpha) = links[0];
        assert_eq!((i, j), (0, 1));
        assert!((alpha - 0.5).abs() < 1e-6);
    }
}
