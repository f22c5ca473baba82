// =============================================================================
// Aarohan Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. App State
// 2. Context Helpers
// =============================================================================

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::services::ToastService;

// -----------------------------------------------------------------------------
// 1. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Site configuration, parsed once at startup.
    pub config: StoredValue<SiteConfig>,

    /// In-app notifications.
    pub toasts: ToastService,

    /// True until the loading screen has been dismissed.
    pub loading: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        let toasts = ToastService::new(config.toast_duration_ms);
        Self {
            config: StoredValue::new(config),
            toasts,
            loading: RwSignal::new(true),
        }
    }

    /// Read a value out of the site configuration.
    pub fn with_config<T>(&self, f: impl FnOnce(&SiteConfig) -> T) -> T {
        self.config.with_value(f)
    }
}

// -----------------------------------------------------------------------------
// 2. Context Helpers
// -----------------------------------------------------------------------------

/// Provide the app state and its toast service to every descendant.
pub fn provide_app_state(state: AppState) {
    provide_context(state.toasts);
    provide_context(state);
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
