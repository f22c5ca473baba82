// =============================================================================
// Aarohan Web - Site Navigation
// =============================================================================
// Fixed overlay nav. Transparent over the hero, solid once the page scrolls.
// Mobile-responsive with a hamburger button and slide-out drawer.
// =============================================================================

use gloo_events::EventListener;
use leptos::prelude::*;

use crate::routes::Page;
use crate::state::use_app_state;

/// Scroll offset (px) after which the nav turns solid.
pub const SOLID_AFTER_PX: f64 = 40.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SOLID_AFTER_PX
}

/// Site navigation bar.
///
/// # Arguments
/// * `active` - The page currently shown; its link is highlighted.
#[component]
pub fn SiteNav(active: Page) -> impl IntoView {
    let brand = use_app_state().with_config(|c| c.site_name.clone());

    let menu_open = RwSignal::new(false);
    let scrolled = RwSignal::new(false);
    let scroll_listener = StoredValue::new_local(None::<EventListener>);

    if let Some(window) = web_sys::window() {
        scrolled.set(is_scrolled(window.scroll_y().unwrap_or_default()));
        let target = window.clone();
        scroll_listener.set_value(Some(EventListener::new(&target, "scroll", move |_| {
            let y = window.scroll_y().unwrap_or_default();
            scrolled.try_set(is_scrolled(y));
        })));
    }

    on_cleanup(move || {
        scroll_listener.try_update_value(|l| l.take());
    });

    let link_class = move |page: Page, base: &'static str| {
        if page == active { format!("{} active", base) } else { base.to_string() }
    };

    let links = move |base: &'static str| {
        Page::ALL
            .into_iter()
            .filter(|p| p.in_primary_nav() && *p != Page::Contact)
            .map(|page| {
                view! {
                    <a
                        href=page.path()
                        class=link_class(page, base)
                        on:click=move |_| menu_open.set(false)
                    >
                        {page.nav_label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="site-nav" class:scrolled=move || scrolled.get()>
            <a href="/" class="nav-logo" on:click=move |_| menu_open.set(false)>
                <span class="nav-logo-mark"></span>
                <span class="nav-logo-text">{brand.clone()}</span>
            </a>

            // Desktop nav links (hidden on mobile)
            <div class="nav-links desktop-only">
                {links("nav-link")}
            </div>

            <a href=Page::Contact.path() class="nav-cta desktop-only">"Get in Touch"</a>

            // Hamburger button (mobile only)
            <button
                class="hamburger-btn mobile-only"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|v| *v = !*v)
            >
                <span class=move || if menu_open.get() { "hamburger-line open line-1" } else { "hamburger-line line-1" }></span>
                <span class=move || if menu_open.get() { "hamburger-line open line-2" } else { "hamburger-line line-2" }></span>
                <span class=move || if menu_open.get() { "hamburger-line open line-3" } else { "hamburger-line line-3" }></span>
            </button>

            // Mobile backdrop (closes menu on tap)
            <div
                class=move || if menu_open.get() { "mobile-backdrop visible" } else { "mobile-backdrop" }
                on:click=move |_| menu_open.set(false)
            ></div>

            // Mobile drawer
            <div class=move || if menu_open.get() { "mobile-drawer open" } else { "mobile-drawer" }>
                <nav class="drawer-nav">
                    {links("mobile-nav-link")}
                    <a
                        href=Page::Contact.path()
                        class=link_class(Page::Contact, "mobile-nav-link")
                        on:click=move |_| menu_open.set(false)
                    >
                        {Page::Contact.nav_label()}
                    </a>
                </nav>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_only_past_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SOLID_AFTER_PX));
        assert!(is_scrolled(SOLID_AFTER_PX + 1.0));
    }
}
