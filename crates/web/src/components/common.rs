// =============================================================================
// Aarohan Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Buttons
// 2. Section Header
// 3. Loading Screen
// 4. Typewriter
// =============================================================================

use gloo_timers::callback::Interval;
use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Buttons
// -----------------------------------------------------------------------------

/// Button variant styles.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Form submit button that shows a spinner and disables itself while busy.
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(optional)] variant: ButtonVariant,
) -> impl IntoView {
    view! {
        <button type="submit" class=variant.class() disabled=move || busy.get()>
            {move || if busy.get() {
                view! {
                    <span class="spinner-small"></span>
                    <span>{busy_label.clone()}</span>
                }.into_any()
            } else {
                view! { <span>{label.clone()}</span> }.into_any()
            }}
        </button>
    }
}

/// Anchor styled as a button.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    #[prop(optional)] variant: ButtonVariant,
) -> impl IntoView {
    view! {
        <a href=href class=variant.class()>{label}</a>
    }
}

// -----------------------------------------------------------------------------
// 2. Section Header
// -----------------------------------------------------------------------------

/// Eyebrow, heading and optional lead paragraph, revealed on scroll.
#[component]
pub fn SectionHeader(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] lead: Option<String>,
) -> impl IntoView {
    view! {
        <header class="section-header reveal">
            <span class="section-eyebrow">{eyebrow}</span>
            <h2 class="section-title">{title}</h2>
            {lead.map(|l| view! { <p class="section-lead">{l}</p> })}
        </header>
    }
}

// -----------------------------------------------------------------------------
// 3. Loading Screen
// -----------------------------------------------------------------------------

/// Branded full-page loader shown before the router renders.
#[component]
pub fn LoadingScreen(#[prop(into)] brand: String) -> impl IntoView {
    view! {
        <div class="loading-screen" role="progressbar" aria-label="Loading">
            <div class="loading-mark">
                <span class="loading-ring"></span>
                <span class="loading-core"></span>
            </div>
            <p class="loading-brand">{brand}</p>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Typewriter
// -----------------------------------------------------------------------------

/// First `chars` characters of `text`, never splitting a code point.
pub fn typewriter_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Types `text` out one character at a time.
#[component]
pub fn Typewriter(
    text: &'static str,
    #[prop(default = 45)] speed_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let total = text.chars().count();
    let shown = RwSignal::new(0usize);
    let ticker = StoredValue::new_local(None::<Interval>);

    ticker.set_value(Some(Interval::new(speed_ms, move || {
        shown.try_update(|n| *n = (*n + 1).min(total));
    })));

    // Stop ticking once complete; the interval cannot drop itself mid-callback
    Effect::new(move |_| {
        if shown.get() >= total {
            ticker.try_update_value(|t| t.take());
        }
    });

    on_cleanup(move || {
        ticker.try_update_value(|t| t.take());
    });

    view! {
        <span class=format!("typewriter {}", class) aria-label=text>
            {move || typewriter_prefix(text, shown.get())}
            <span class="typewriter-caret" class:done=move || { let done: bool = shown.get() >= total; done }>"|"</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_counts_characters() {
        assert_eq!(typewriter_prefix("Aarohan", 0), "");
        assert_eq!(typewriter_prefix("Aarohan", 3), "Aar");
        assert_eq!(typewriter_prefix("Aarohan", 50), "Aarohan");
    }

    #[test]
    fn prefix_respects_multibyte_characters() {
        let text = "आरोहण rise";
        assert_eq!(typewriter_prefix(text, 1), "आ");
        assert_eq!(typewriter_prefix(text, text.chars().count()), text);
    }
}
