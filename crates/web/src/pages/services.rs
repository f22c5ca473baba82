// =============================================================================
// Aarohan Web - Services Page
// =============================================================================
// One tab per vertical. The open tab follows the URL fragment
// (`/services#media`) and falls back to the first vertical.
// =============================================================================

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::{LinkButton, PageShell, SectionHeader};
use crate::content::{Vertical, VERTICALS};
use crate::routes::Page;
use crate::utils::{contact_link, fragment, services_link};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| location.hash.with(|hash| Vertical::from_fragment(fragment(hash)).id));

    view! {
        <PageShell page=Page::Services>
            <section class="page-hero services-hero">
                <span class="hero-eyebrow reveal">"Services"</span>
                <h1 class="reveal" data-reveal-delay="100">"Five verticals, one standard"</h1>
            </section>

            <section class="section services-tabs">
                <SectionHeader eyebrow="Our verticals" title="Pick a vertical to explore" />

                <div class="tab-list reveal" role="tablist">
                    {VERTICALS
                        .iter()
                        .map(|vertical| {
                            let id = vertical.id;
                            view! {
                                <a
                                    href=services_link(id)
                                    role="tab"
                                    class="tab"
                                    class:active=move || active.get() == id
                                    aria-selected=move || (active.get() == id).to_string()
                                >
                                    {vertical.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                // Tab panels swap after mount, so they are not reveal targets
                {move || {
                    let vertical = Vertical::find(active.get()).unwrap_or(&VERTICALS[0]);
                    view! { <VerticalPanel vertical=vertical /> }
                }}
            </section>
        </PageShell>
    }
}

#[component]
fn VerticalPanel(vertical: &'static Vertical) -> impl IntoView {
    view! {
        <div class="tab-panel" role="tabpanel">
            <div class="tab-panel-text">
                <h2>{vertical.name}</h2>
                <h3 class="tab-headline">{vertical.headline}</h3>
                <p>{vertical.summary}</p>
                <ul class="offering-list">
                    {vertical
                        .offerings
                        .iter()
                        .map(|offering| view! { <li>{*offering}</li> })
                        .collect_view()}
                </ul>
                <LinkButton href=contact_link(vertical.id) label=format!("Enquire about {}", vertical.name) />
            </div>
            <img class="tab-panel-image" src=vertical.image alt=vertical.name />
        </div>
    }
}
