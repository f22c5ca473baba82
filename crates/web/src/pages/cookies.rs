// =============================================================================
// Aarohan Web - Cookie Policy Page
// =============================================================================

use leptos::prelude::*;

use super::legal::{LegalPage, LegalSection};
use crate::routes::Page;

const SECTIONS: &[LegalSection] = &[
    LegalSection {
        heading: "What Are Cookies",
        paragraphs: &["Cookies are small text files a website stores in your browser."],
        items: &[],
    },
    LegalSection {
        heading: "Cookies We Use",
        paragraphs: &[
            "This site does not set any cookies and does not store data in your browser.",
            "Form contents are held in memory only while the page is open.",
        ],
        items: &[],
    },
    LegalSection {
        heading: "Third Parties",
        paragraphs: &["We do not embed third-party trackers or advertising."],
        items: &[],
    },
    LegalSection {
        heading: "Changes",
        paragraphs: &["If this changes we will update this page and the date above."],
        items: &[],
    },
];

#[component]
pub fn CookiesPage() -> impl IntoView {
    view! { <LegalPage page=Page::Cookies sections=SECTIONS /> }
}
