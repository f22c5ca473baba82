// =============================================================================
// Aarohan Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Html, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::LoadingScreen;
use crate::config;
use crate::graphics::CustomCursor;
use crate::pages::{
    AboutPage, CareerPage, ContactPage, CookiesPage, HomePage, InnovationPage, NotFoundPage,
    PortfolioPage, PrivacyPage, ServicesPage, TermsPage,
};
use crate::routes::Page;
use crate::services::Toaster;
use crate::state::{provide_app_state, AppState};

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = config::load();
    let theme = config.theme.as_str();
    let site_name = config.site_name.clone();
    let description = config.description.clone();
    let loading_delay = config.loading_delay_ms;

    let app_state = AppState::new(config);
    let loading = app_state.loading;
    provide_app_state(app_state);

    // Loading screen stays up for a fixed delay on first load
    let loader = StoredValue::new_local(None::<Timeout>);
    loader.set_value(Some(Timeout::new(loading_delay, move || {
        loading.try_set(false);
    })));
    on_cleanup(move || {
        loader.try_update_value(|t| t.take());
    });

    let brand = site_name.clone();

    view! {
        // Document-level attributes live here so leaving the root removes them
        <Html {..} lang="en" data-theme=theme />
        <Title formatter=move |text: String| format!("{} | {}", text, site_name) />
        <Meta name="description" content=description />

        <Router>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <LoadingScreen brand=brand.clone() /> }
            >
                <AppRoutes />
            </Show>
        </Router>

        <CustomCursor />
        <Toaster />
    }
}

// -----------------------------------------------------------------------------
// 3. Router Configuration
// -----------------------------------------------------------------------------

/// Component rendered for a page.
pub fn page_view(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Services => view! { <ServicesPage /> }.into_any(),
        Page::Portfolio => view! { <PortfolioPage /> }.into_any(),
        Page::Innovation => view! { <InnovationPage /> }.into_any(),
        Page::Contact => view! { <ContactPage /> }.into_any(),
        Page::Career => view! { <CareerPage /> }.into_any(),
        Page::Privacy => view! { <PrivacyPage /> }.into_any(),
        Page::Terms => view! { <TermsPage /> }.into_any(),
        Page::Cookies => view! { <CookiesPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Anything the table below does not match exactly goes through the page
/// registry, which also accepts a trailing slash. Everything else is a 404.
#[component]
fn ResolvedPage() -> impl IntoView {
    let pathname = use_location().pathname;
    move || {
        let page = pathname.with(|path| Page::from_path(path));
        log::debug!("Resolved {} through the page registry", page.path());
        page_view(page)
    }
}

/// The route table, one entry per `Page::ALL` in the same order.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <ResolvedPage /> }>
            <Route path=path!("/") view=|| page_view(Page::Home) />
            <Route path=path!("/about") view=|| page_view(Page::About) />
            <Route path=path!("/services") view=|| page_view(Page::Services) />
            <Route path=path!("/portfolio") view=|| page_view(Page::Portfolio) />
            <Route path=path!("/innovation") view=|| page_view(Page::Innovation) />
            <Route path=path!("/contact") view=|| page_view(Page::Contact) />
            <Route path=path!("/career") view=|| page_view(Page::Career) />

            // Legal pages
            <Route path=path!("/privacy") view=|| page_view(Page::Privacy) />
            <Route path=path!("/terms") view=|| page_view(Page::Terms) />
            <Route path=path!("/cookies") view=|| page_view(Page::Cookies) />
        </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `path!` needs literals, so the table is checked against the registry.
    #[test]
    fn route_table_matches_page_registry() {
        let source = include_str!("app.rs");
        let marker = concat!("<Route path=path!", "(\"");
        let table: Vec<&str> = source
            .split(marker)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        let registry: Vec<&str> = Page::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(table, registry);
    }
}
