// =============================================================================
// Aarohan Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. Logging
// 4. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod graphics;
pub mod pages;
pub mod reveal;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::SiteConfig;
pub use error::{ConfigError, GraphicsError};
pub use routes::Page;
pub use state::AppState;

// -----------------------------------------------------------------------------
// 3. Logging
// -----------------------------------------------------------------------------

/// Install the panic hook and console logger. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // Ignore the error if a logger is already installed
    let _ = console_log::init_with_level(config::Environment::current().log_level());
}

// -----------------------------------------------------------------------------
// 4. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    init_logging();
    log::info!("Mounting Aarohan Web app...");
    leptos::mount::mount_to_body(app::App);
}
