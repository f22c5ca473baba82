#![cfg(target_arch = "wasm32")]

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use aarohan_web::app::AppRoutes;
use aarohan_web::config::SiteConfig;
use aarohan_web::error::GraphicsError;
use aarohan_web::graphics::animation::{AnimationLoop, FrameClock};
use aarohan_web::graphics::resources::{webgl_context, GpuResources};
use aarohan_web::graphics::surface::{GlSurface, MountedSurface, Scene};
use aarohan_web::pages::ContactPage;
use aarohan_web::reveal::{reveal_element, RevealController, RevealOptions, VISIBLE_CLASS};
use aarohan_web::services::{ToastKind, ToastService};
use aarohan_web::state::{provide_app_state, AppState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    window, Document, Element, Event, EventInit, HtmlButtonElement, HtmlCanvasElement,
    HtmlElement, WebGlBuffer, WebGlRenderingContext as GL,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window()
        .and_then(|window| window.document())
        .expect("document available")
}

fn reveal_target(document: &Document, style: &str) -> Element {
    let element = document.create_element("div").expect("create element");
    element.set_class_name("reveal");
    element.set_attribute("style", style).expect("set style");
    document
        .body()
        .expect("body")
        .append_child(&element)
        .expect("append element");
    element
}

fn container(document: &Document) -> HtmlElement {
    let element: HtmlElement = document
        .create_element("div")
        .expect("create container")
        .dyn_into()
        .expect("html element");
    document
        .body()
        .expect("body")
        .append_child(&element)
        .expect("append container");
    element
}

fn dispatch(target: &Element, kind: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).expect("create event");
    target.dispatch_event(&event).expect("dispatch event")
}

/// Set a form control's value the way typing would, then fire `event`.
fn fill(root: &Element, selector: &str, value: &str, event: &str) {
    let field = root
        .query_selector(selector)
        .expect("valid selector")
        .expect("field rendered");
    js_sys::Reflect::set(&field, &JsValue::from_str("value"), &JsValue::from_str(value))
        .expect("set value");
    dispatch(&field, event);
}

fn field_value(root: &Element, selector: &str) -> String {
    let field = root
        .query_selector(selector)
        .expect("valid selector")
        .expect("field rendered");
    js_sys::Reflect::get(&field, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

fn set_top(element: &Element, top: &str) {
    element
        .set_attribute(
            "style",
            &format!("position:absolute;top:{};left:0;width:100px;height:100px;", top),
        )
        .expect("set style");
}

// -----------------------------------------------------------------------------
// Reveal
// -----------------------------------------------------------------------------

#[wasm_bindgen_test]
fn reveal_element_reports_only_the_first_reveal() {
    let document = document();
    let target = reveal_target(&document, "");

    assert!(reveal_element(&target));
    assert!(target.class_list().contains(VISIBLE_CLASS));
    assert!(!reveal_element(&target));
    target.remove();
}

#[wasm_bindgen_test(async)]
async fn element_scrolled_into_view_is_revealed_by_the_observer() {
    let document = document();
    let target = reveal_target(&document, "");
    set_top(&target, "5000px");

    let controller = RevealController::attach(&document, &RevealOptions::default());
    TimeoutFuture::new(400).await;
    assert!(!target.class_list().contains(VISIBLE_CLASS));

    // Only the observer is left to notice the move; the re-check already ran
    set_top(&target, "0");
    TimeoutFuture::new(300).await;
    assert!(target.class_list().contains(VISIBLE_CLASS));

    set_top(&target, "5000px");
    TimeoutFuture::new(200).await;
    assert!(target.class_list().contains(VISIBLE_CLASS));

    drop(controller);
    target.remove();
}

#[wasm_bindgen_test(async)]
async fn element_in_view_at_mount_is_revealed_and_stays_revealed() {
    let document = document();
    let target = reveal_target(&document, "position:absolute;top:0;left:0;width:100px;height:100px;");

    let controller = RevealController::attach(&document, &RevealOptions::default());
    assert!(!controller.is_empty());

    TimeoutFuture::new(400).await;
    assert!(target.class_list().contains(VISIBLE_CLASS));

    drop(controller);
    TimeoutFuture::new(50).await;
    assert!(target.class_list().contains(VISIBLE_CLASS));
    target.remove();
}

#[wasm_bindgen_test(async)]
async fn element_below_the_fold_stays_hidden() {
    let document = document();
    let target = reveal_target(&document, "position:absolute;top:5000px;left:0;width:100px;height:100px;");

    let controller = RevealController::attach(&document, &RevealOptions::default());
    TimeoutFuture::new(400).await;
    assert!(!target.class_list().contains(VISIBLE_CLASS));

    drop(controller);
    target.remove();
}

#[wasm_bindgen_test(async)]
async fn animation_loop_stops_when_dropped() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&ticks);
    let frame_loop = AnimationLoop::start(move |_| counter.set(counter.get() + 1));

    TimeoutFuture::new(200).await;
    assert!(ticks.get() > 0);
    assert!(frame_loop.is_running());

    drop(frame_loop);
    let after_drop = ticks.get();
    TimeoutFuture::new(200).await;
    assert_eq!(ticks.get(), after_drop);
}

#[wasm_bindgen_test]
fn gpu_resources_are_released() {
    let canvas: HtmlCanvasElement = document()
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into()
        .expect("canvas element");
    // Headless browsers without WebGL have nothing to release
    let Ok(gl) = webgl_context(&canvas) else {
        return;
    };

    let mut resources = GpuResources::new(gl);
    resources.create_buffer(&[0.0, 1.0, 2.0]).expect("buffer");
    assert_eq!(resources.live_count(), 1);

    resources.release();
    assert_eq!(resources.live_count(), 0);
}

// -----------------------------------------------------------------------------
// Graphics surface
// -----------------------------------------------------------------------------

thread_local! {
    static FRAMES: Cell<u32> = Cell::new(0);
    static BUFFER: RefCell<Option<WebGlBuffer>> = RefCell::new(None);
}

struct CountingScene;

impl Scene for CountingScene {
    fn resize(&mut self, _gl: &GL, _width: u32, _height: u32) {}

    fn frame(&mut self, _gl: &GL, _clock: &FrameClock) {
        FRAMES.with(|frames| frames.set(frames.get() + 1));
    }
}

fn build_counting(resources: &mut GpuResources) -> Result<Box<dyn Scene>, GraphicsError> {
    let buffer = resources.create_buffer(&[0.0, 0.5, 1.0])?;
    BUFFER.with(|slot| *slot.borrow_mut() = Some(buffer));
    Ok(Box::new(CountingScene))
}

fn build_failing(_resources: &mut GpuResources) -> Result<Box<dyn Scene>, GraphicsError> {
    Err(GraphicsError::Allocation("scene"))
}

fn frames() -> u32 {
    FRAMES.with(Cell::get)
}

fn reset_frames() {
    FRAMES.with(|frames| frames.set(0));
}

#[wasm_bindgen_test(async)]
async fn dropped_surface_stops_drawing_and_releases_the_context() {
    let document = document();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into()
        .expect("canvas element");
    document.body().expect("body").append_child(&canvas).expect("append canvas");
    let Ok(gl) = webgl_context(&canvas) else {
        canvas.remove();
        return;
    };

    reset_frames();
    let surface = MountedSurface::mount(canvas.clone(), build_counting, false).expect("mount");
    assert!(surface.live_resources() > 0);
    TimeoutFuture::new(200).await;
    assert!(frames() > 0);

    drop(surface);
    let after_drop = frames();
    TimeoutFuture::new(200).await;
    assert_eq!(frames(), after_drop);

    let buffer = BUFFER.with(|slot| slot.borrow_mut().take()).expect("buffer built");
    assert!(gl.is_context_lost() || !gl.is_buffer(Some(&buffer)));
    canvas.remove();
}

#[wasm_bindgen_test(async)]
async fn gl_surface_stops_drawing_when_unmounted() {
    let document = document();
    let root = container(&document);
    reset_frames();
    let handle = leptos::mount::mount_to(root.clone(), || {
        view! { <GlSurface build=build_counting /> }
    });

    TimeoutFuture::new(200).await;
    if root.query_selector(".gl-fallback").ok().flatten().is_some() {
        // No WebGL in this browser
        drop(handle);
        root.remove();
        return;
    }
    assert!(frames() > 0);

    drop(handle);
    let after_unmount = frames();
    TimeoutFuture::new(200).await;
    assert_eq!(frames(), after_unmount);
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn failed_scene_shows_static_fallback() {
    let document = document();
    let root = container(&document);
    let handle = leptos::mount::mount_to(root.clone(), || {
        view! { <GlSurface build=build_failing /> }
    });

    TimeoutFuture::new(100).await;
    assert!(root.query_selector(".gl-fallback").ok().flatten().is_some());
    assert!(root.query_selector("canvas").ok().flatten().is_none());

    drop(handle);
    root.remove();
}

// -----------------------------------------------------------------------------
// Contact form
// -----------------------------------------------------------------------------

const FORM_DELAY_MS: u32 = 150;

/// Mount the contact page and hand back its toast service.
fn mount_contact(root: &HtmlElement) -> (Box<dyn Any>, ToastService) {
    let slot = Rc::new(Cell::new(None::<ToastService>));
    let captured = Rc::clone(&slot);
    let handle = leptos::mount::mount_to(root.clone(), move || {
        provide_meta_context();
        let state = AppState::new(SiteConfig {
            form_delay_ms: FORM_DELAY_MS,
            toast_duration_ms: 10_000,
            ..SiteConfig::default()
        });
        captured.set(Some(state.toasts));
        provide_app_state(state);
        view! {
            <Router>
                <ContactPage />
            </Router>
        }
    });
    let toasts = slot.get().expect("state provided");
    (Box::new(handle), toasts)
}

fn submit_button(root: &Element) -> HtmlButtonElement {
    root.query_selector("button[type=submit]")
        .expect("valid selector")
        .expect("submit button")
        .dyn_into()
        .expect("button element")
}

#[wasm_bindgen_test(async)]
async fn contact_submit_shows_toast_and_resets_fields() {
    let document = document();
    let root = container(&document);
    let (handle, toasts) = mount_contact(&root);
    TimeoutFuture::new(20).await;

    fill(&root, "input[name=name]", "Asha Rao", "input");
    fill(&root, "input[name=email]", "asha@example.com", "input");
    fill(&root, "input[name=company]", "Rao Labs", "input");
    fill(&root, "select[name=category]", "partnership", "change");
    fill(&root, "textarea[name=message]", "Let's work together.", "input");

    let form = root.query_selector("form").expect("valid selector").expect("form");
    dispatch(&form, "submit");
    TimeoutFuture::new(20).await;
    assert!(submit_button(&root).disabled());
    assert!(toasts.snapshot().is_empty());

    TimeoutFuture::new(FORM_DELAY_MS + 100).await;
    let shown = toasts.snapshot();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, ToastKind::Success);
    assert!(!submit_button(&root).disabled());

    assert_eq!(field_value(&root, "input[name=name]"), "");
    assert_eq!(field_value(&root, "input[name=email]"), "");
    assert_eq!(field_value(&root, "input[name=company]"), "");
    assert_eq!(field_value(&root, "textarea[name=message]"), "");
    assert_eq!(field_value(&root, "select[name=category]"), "general");

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn contact_submit_with_blank_name_does_nothing() {
    let document = document();
    let root = container(&document);
    let (handle, toasts) = mount_contact(&root);
    TimeoutFuture::new(20).await;

    fill(&root, "input[name=email]", "asha@example.com", "input");
    fill(&root, "textarea[name=message]", "Hello", "input");

    let form = root.query_selector("form").expect("valid selector").expect("form");
    dispatch(&form, "submit");
    TimeoutFuture::new(FORM_DELAY_MS + 100).await;

    assert!(toasts.snapshot().is_empty());
    assert!(!submit_button(&root).disabled());
    assert_eq!(field_value(&root, "input[name=email]"), "asha@example.com");

    drop(handle);
    root.remove();
}

// -----------------------------------------------------------------------------
// Toasts
// -----------------------------------------------------------------------------

#[wasm_bindgen_test(async)]
async fn toasts_dismiss_themselves_and_release_their_timers() {
    let owner = Owner::new();
    owner.set();

    let toasts = ToastService::new(100);
    let first = toasts.success("Sent", "Thanks");
    toasts.info("Note", "");
    assert_eq!(toasts.pending_timers(), 2);

    toasts.dismiss(first);
    assert_eq!(toasts.pending_timers(), 1);
    assert_eq!(toasts.snapshot().len(), 1);

    TimeoutFuture::new(200).await;
    assert!(toasts.snapshot().is_empty());

    // A fired timer is released on the next push
    toasts.error("Oops", "");
    assert_eq!(toasts.pending_timers(), 1);

    owner.cleanup();
    assert_eq!(toasts.pending_timers(), 0);
}

// -----------------------------------------------------------------------------
// Routing
// -----------------------------------------------------------------------------

/// Mount the route table at `path` and return whether `selector` rendered.
async fn renders_at(path: &str, selector: &str) -> bool {
    let window = window().expect("window");
    let original = window.location().href().expect("href");
    let history = window.history().expect("history");
    history
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .expect("replace url");

    let document = document();
    let root = container(&document);
    let handle = leptos::mount::mount_to(root.clone(), || {
        provide_meta_context();
        provide_app_state(AppState::new(SiteConfig::default()));
        view! {
            <Router>
                <AppRoutes />
            </Router>
        }
    });
    TimeoutFuture::new(50).await;
    let found = root.query_selector(selector).ok().flatten().is_some();

    drop(handle);
    root.remove();
    history
        .replace_state_with_url(&JsValue::NULL, "", Some(&original))
        .expect("restore url");
    found
}

#[wasm_bindgen_test(async)]
async fn unknown_path_renders_not_found() {
    assert!(renders_at("/does-not-exist", ".not-found-code").await);
}

#[wasm_bindgen_test(async)]
async fn trailing_slash_renders_the_page() {
    assert!(renders_at("/about/", "main.page-about").await);
}
