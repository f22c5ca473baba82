// =============================================================================
// Aarohan Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use chrono::Datelike;
use leptos::prelude::*;

use crate::content::VERTICALS;
use crate::routes::Page;
use crate::state::use_app_state;

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

fn page_link(page: Page) -> impl IntoView {
    view! { <a href=page.path() class="footer-link">{page.nav_label()}</a> }
}

#[component]
pub fn Footer() -> impl IntoView {
    let (brand, tagline, email) = use_app_state()
        .with_config(|c| (c.site_name.clone(), c.tagline.clone(), c.contact_email.clone()));
    let year = chrono::Local::now().year();
    let mailto = format!("mailto:{}", email);

    view! {
        <footer class="site-footer">
            <div class="footer-main">
                // Brand Column
                <div class="footer-brand-col">
                    <a href="/" class="footer-logo-link">{brand.clone()}</a>
                    <p class="footer-tagline">{tagline}</p>
                    <a href=mailto class="footer-email">{email}</a>
                </div>

                // Links Columns
                <div class="footer-links-grid">
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Company"</h5>
                        {[Page::About, Page::Innovation, Page::Portfolio, Page::Career]
                            .into_iter()
                            .map(page_link)
                            .collect_view()}
                    </div>
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Verticals"</h5>
                        {VERTICALS
                            .iter()
                            .map(|v| {
                                let href = format!("{}#{}", Page::Services.path(), v.id);
                                view! { <a href=href class="footer-link">{v.name}</a> }
                            })
                            .collect_view()}
                    </div>
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Legal"</h5>
                        {Page::ALL
                            .into_iter()
                            .filter(|p| p.is_legal())
                            .map(page_link)
                            .collect_view()}
                        {page_link(Page::Contact)}
                    </div>
                </div>
            </div>

            <div class="footer-divider"></div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">{format!("© {} {}. All rights reserved.", year, brand)}</p>
            </div>
        </footer>
    }
}
