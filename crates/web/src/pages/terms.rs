// =============================================================================
// Aarohan Web - Terms of Service Page
// =============================================================================

use leptos::prelude::*;

use super::legal::{LegalPage, LegalSection};
use crate::routes::Page;

const SECTIONS: &[LegalSection] = &[
    LegalSection {
        heading: "Acceptance of Terms",
        paragraphs: &["By using this website you agree to these terms. If you do not agree, please do not use the site."],
        items: &[],
    },
    LegalSection {
        heading: "Use of Content",
        paragraphs: &["All text, images and marks on this site belong to Aarohan Group or its licensors. You may not:"],
        items: &[
            "Reproduce content for commercial purposes without permission",
            "Use our marks in a way that suggests endorsement",
            "Interfere with the operation of the site",
        ],
    },
    LegalSection {
        heading: "No Offer",
        paragraphs: &["Information on this site is provided for general purposes and is not an offer of products, services or securities."],
        items: &[],
    },
    LegalSection {
        heading: "Limitation of Liability",
        paragraphs: &["The site is provided as is. Aarohan Group is not liable for losses arising from its use."],
        items: &[],
    },
    LegalSection {
        heading: "Governing Law",
        paragraphs: &["These terms are governed by the laws of India. Courts in Pune have exclusive jurisdiction."],
        items: &[],
    },
];

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPage page=Page::Terms sections=SECTIONS /> }
}
