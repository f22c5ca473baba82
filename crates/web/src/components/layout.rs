// =============================================================================
// Aarohan Web - Page Shell
// =============================================================================
// Shared chrome for every page: title, nav, reveal controller, footer.
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use super::{Footer, SiteNav};
use crate::reveal::{use_reveal, RevealOptions};
use crate::routes::Page;

fn slug(page: Page) -> &'static str {
    match page.path().trim_start_matches('/') {
        "" => "home",
        "404" => "not-found",
        other => other,
    }
}

/// Wraps a page's sections with the site chrome.
///
/// Content tagged `class="reveal"` fades in as it scrolls into view.
#[component]
pub fn PageShell(page: Page, children: Children) -> impl IntoView {
    // Registered before children render; the effect runs once they are in the DOM
    use_reveal(RevealOptions::default());

    view! {
        <Title text=page.title() />
        <SiteNav active=page />
        <main class=format!("page page-{}", slug(page))>
            {children()}
        </main>
        <Footer />
    }
}
