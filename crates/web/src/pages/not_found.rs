// =============================================================================
// Aarohan Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

use crate::components::PageShell;
use crate::routes::Page;

/// Rendered for any path outside the route table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageShell page=Page::NotFound>
            <section class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <a href=Page::Home.path() class="btn btn-primary">
                    "Go Home"
                </a>
            </section>
        </PageShell>
    }
}
