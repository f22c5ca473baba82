// =============================================================================
// Aarohan Web - Legal Page Layout
// =============================================================================

use leptos::prelude::*;

use crate::components::PageShell;
use crate::routes::Page;

/// Date shown under each legal page title.
pub const LAST_UPDATED: &str = "1 September 2026";

/// A numbered section of a legal page.
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub items: &'static [&'static str],
}

/// Shared layout for privacy, terms and cookie pages.
#[component]
pub fn LegalPage(page: Page, sections: &'static [LegalSection]) -> impl IntoView {
    view! {
        <PageShell page=page>
            <div class="legal-container">
                <div class="legal-header reveal">
                    <h1>{page.title()}</h1>
                    <p class="legal-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>
                </div>

                <div class="legal-content">
                    {sections
                        .iter()
                        .enumerate()
                        .map(|(i, section)| view! {
                            <section class="legal-section reveal">
                                <h2>{format!("{}. {}", i + 1, section.heading)}</h2>
                                {section.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                                {(!section.items.is_empty()).then(|| view! {
                                    <ul>
                                        {section.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                    </ul>
                                })}
                            </section>
                        })
                        .collect_view()}
                </div>
            </div>
        </PageShell>
    }
}
