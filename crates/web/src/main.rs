// =============================================================================
// Aarohan Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use aarohan_web::{init_logging, App};

fn main() {
    init_logging();

    log::info!("Starting Aarohan Web ({:?})", aarohan_web::config::Environment::current());

    // Mount the Leptos app to the body
    leptos::mount::mount_to_body(App);
}
