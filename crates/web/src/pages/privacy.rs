// =============================================================================
// Aarohan Web - Privacy Policy Page
// =============================================================================

use leptos::prelude::*;

use super::legal::{LegalPage, LegalSection};
use crate::routes::Page;

const SECTIONS: &[LegalSection] = &[
    LegalSection {
        heading: "Information We Collect",
        paragraphs: &["When you contact us through this site, you may share:"],
        items: &["Your name and email address", "Phone number and company (optional)", "The content of your message"],
    },
    LegalSection {
        heading: "How We Use Your Information",
        paragraphs: &["We use what you send only to respond to your inquiry and route it to the right vertical."],
        items: &[],
    },
    LegalSection {
        heading: "Information Sharing",
        paragraphs: &["We do not sell your personal information. We may share it with:"],
        items: &["Group companies handling your inquiry", "Law enforcement when legally required"],
    },
    LegalSection {
        heading: "Your Rights",
        paragraphs: &["You may ask us to access, correct or delete information you have shared with us."],
        items: &[],
    },
    LegalSection {
        heading: "Contact",
        paragraphs: &["Questions about this policy can be sent to privacy@aarohan.group."],
        items: &[],
    },
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalPage page=Page::Privacy sections=SECTIONS /> }
}
