// =============================================================================
// Aarohan Web - Innovation Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{LinkButton, PageShell, SectionHeader};
use crate::graphics::{GlSurface, RubiksScene};
use crate::routes::Page;
use crate::utils::contact_link;

const PILLARS: &[(&str, &str)] = &[
    (
        "Labs",
        "Small cross-vertical teams that prototype for twelve weeks, then ship or stop.",
    ),
    (
        "Open formulations",
        "Ojas publishes ingredient research so practitioners can build on it.",
    ),
    (
        "Green building",
        "Every new Infra project is designed to a net-zero operating target.",
    ),
    (
        "Founder studio",
        "Ventures pairs founders with operators from across the group.",
    ),
];

#[component]
pub fn InnovationPage() -> impl IntoView {
    view! {
        <PageShell page=Page::Innovation>
            <section class="page-hero innovation-hero">
                <div class="page-hero-text">
                    <span class="hero-eyebrow reveal">"Innovation"</span>
                    <h1 class="reveal" data-reveal-delay="100">"Solving the puzzle, one turn at a time"</h1>
                    <p class="reveal" data-reveal-delay="200">
                        "Hard problems rarely yield to one move. We keep turning them."
                    </p>
                </div>
                <GlSurface build=RubiksScene::build class="innovation-visual" parallax=true />
            </section>

            <section class="section pillars">
                <SectionHeader eyebrow="How we innovate" title="Four pillars" />
                <div class="pillar-grid">
                    {PILLARS
                        .iter()
                        .map(|(name, text)| view! {
                            <div class="pillar-card reveal">
                                <h3>{*name}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section cta reveal">
                <h2>"Have an idea worth building?"</h2>
                <LinkButton href=contact_link("partnership") label="Partner with us" />
            </section>
        </PageShell>
    }
}
