// =============================================================================
// Aarohan Web - Managed Graphics Surface
// =============================================================================
// Table of Contents:
// 1. Scene Trait
// 2. Mounted Surface
// 3. GlSurface Component
// 4. Static Fallback
// =============================================================================
//
// `GlSurface` owns the canvas, the WebGL context, the animation loop and the
// window listeners. A scene only builds its geometry and draws a frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use gloo_events::EventListener;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, WebGlRenderingContext as GL};

use super::animation::{normalize_pointer, AnimationLoop, FrameClock};
use super::resources::{lose_context, webgl_context, GpuResources};
use crate::error::GraphicsError;

// -----------------------------------------------------------------------------
// 1. Scene Trait
// -----------------------------------------------------------------------------

/// A decorative scene drawn by a `GlSurface`.
pub trait Scene {
    /// The drawing buffer changed size.
    fn resize(&mut self, gl: &GL, width: u32, height: u32);

    /// Draw one frame.
    fn frame(&mut self, gl: &GL, clock: &FrameClock);
}

/// Builds a scene, creating all GPU objects through `resources`.
pub type SceneBuilder = fn(&mut GpuResources) -> Result<Box<dyn Scene>, GraphicsError>;

// -----------------------------------------------------------------------------
// 2. Mounted Surface
// -----------------------------------------------------------------------------

struct SurfaceState {
    canvas: HtmlCanvasElement,
    scene: Box<dyn Scene>,
    resources: GpuResources,
    pointer: Rc<Cell<Vec2>>,
}

impl SurfaceState {
    fn resize(&mut self) {
        let (width, height) = fit_canvas(&self.canvas);
        let gl = self.resources.gl().clone();
        gl.viewport(0, 0, width as i32, height as i32);
        self.scene.resize(&gl, width, height);
    }

    fn frame(&mut self, clock: &FrameClock) {
        let gl = self.resources.gl().clone();
        self.scene.frame(&gl, clock);
    }
}

/// A live surface. Dropping it stops the loop, removes listeners and
/// releases the GPU objects and the context.
pub struct MountedSurface {
    frame_loop: Option<AnimationLoop>,
    listeners: Vec<EventListener>,
    state: Rc<RefCell<SurfaceState>>,
}

impl MountedSurface {
    pub fn mount(
        canvas: HtmlCanvasElement,
        build: SceneBuilder,
        parallax: bool,
    ) -> Result<Self, GraphicsError> {
        let window = web_sys::window().ok_or(GraphicsError::NoWindow)?;
        let gl = webgl_context(&canvas)?;

        let mut resources = GpuResources::new(gl.clone());
        let scene = match build(&mut resources) {
            Ok(scene) => scene,
            Err(err) => {
                resources.release();
                lose_context(&gl);
                return Err(err);
            }
        };

        let pointer = Rc::new(Cell::new(Vec2::ZERO));
        let state = Rc::new(RefCell::new(SurfaceState {
            canvas,
            scene,
            resources,
            pointer: Rc::clone(&pointer),
        }));
        state.borrow_mut().resize();

        let mut listeners = Vec::new();
        {
            let state = Rc::clone(&state);
            listeners.push(EventListener::new(&window, "resize", move |_| {
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.resize();
                }
            }));
        }
        if parallax {
            let pointer = Rc::clone(&pointer);
            let win = window.clone();
            listeners.push(EventListener::new(&window, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                let height = win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                pointer.set(normalize_pointer(
                    event.client_x() as f64,
                    event.client_y() as f64,
                    width,
                    height,
                ));
            }));
        }

        let frame_loop = {
            let state = Rc::clone(&state);
            AnimationLoop::start(move |time| {
                let mut state = state.borrow_mut();
                let clock = FrameClock {
                    time,
                    pointer: state.pointer.get(),
                };
                state.frame(&clock);
            })
        };

        log::debug!("Graphics surface mounted");
        Ok(Self {
            frame_loop: Some(frame_loop),
            listeners,
            state,
        })
    }

    /// GPU objects the surface still owns.
    pub fn live_resources(&self) -> usize {
        self.state
            .try_borrow()
            .map(|state| state.resources.live_count())
            .unwrap_or(0)
    }
}

impl Drop for MountedSurface {
    fn drop(&mut self) {
        self.frame_loop.take();
        self.listeners.clear();
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.resources.release();
            lose_context(state.resources.gl());
        }
        log::debug!("Graphics surface disposed");
    }
}

/// Match the canvas backing store to its CSS size times the pixel ratio.
fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let ratio = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(2.0);
    let width = ((canvas.client_width().max(1) as f64) * ratio) as u32;
    let height = ((canvas.client_height().max(1) as f64) * ratio) as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
    (width, height)
}

// -----------------------------------------------------------------------------
// 3. GlSurface Component
// -----------------------------------------------------------------------------

/// Canvas that runs `build`'s scene, or shows a static fallback when WebGL
/// is unavailable or the scene fails to build.
#[component]
pub fn GlSurface(
    build: SceneBuilder,
    #[prop(optional, into)] class: String,
    /// Tilt the scene with the pointer.
    #[prop(optional)]
    parallax: bool,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let failed = RwSignal::new(false);
    let mounted = StoredValue::new_local(None::<MountedSurface>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if failed.get_untracked() || mounted.with_value(Option::is_some) {
            return;
        }
        match MountedSurface::mount(canvas, build, parallax) {
            Ok(surface) => mounted.set_value(Some(surface)),
            Err(err) => {
                log::warn!("Decorative scene disabled: {}", err);
                failed.set(true);
            }
        }
    });

    on_cleanup(move || {
        mounted.try_update_value(|surface| surface.take());
    });

    let wrapper_class = format!("gl-surface {}", class);
    view! {
        <div class=wrapper_class aria-hidden="true">
            <Show
                when=move || !failed.get()
                fallback=|| view! { <StaticFallback /> }
            >
                <canvas node_ref=canvas_ref class="gl-canvas"></canvas>
            </Show>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Static Fallback
// -----------------------------------------------------------------------------

/// Pulsing gradient block shown instead of a scene.
#[component]
pub fn StaticFallback() -> impl IntoView {
    view! {
        <div class="gl-fallback">
            <div class="gl-fallback-pulse"></div>
        </div>
    }
}
