// =============================================================================
// Aarohan Web - About Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{PageShell, SectionHeader};
use crate::graphics::{CubeScene, GlSurface};
use crate::routes::Page;

const VALUES: &[(&str, &str)] = &[
    ("Patience", "We measure outcomes in decades, not quarters."),
    ("Craft", "Every vertical is run by people who practise the trade."),
    ("Integrity", "We say what we will do, then do it."),
    ("Community", "Our businesses grow with the places they serve."),
];

const MILESTONES: &[(&str, &str)] = &[
    ("2007", "Aarohan Infra completes its first residential project in Pune."),
    ("2012", "Ojas Wellness launches its first Ayurvedic product line."),
    ("2016", "Aarohan Digital spins out of the group's internal IT team."),
    ("2020", "Aarohan Media begins producing documentary content."),
    ("2023", "Aarohan Ventures opens its first fund for early-stage founders."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageShell page=Page::About>
            <section class="page-hero about-hero">
                <div class="page-hero-text">
                    <span class="hero-eyebrow reveal">"About us"</span>
                    <h1 class="reveal" data-reveal-delay="100">"A group built one ascent at a time"</h1>
                    <p class="reveal" data-reveal-delay="200">
                        "Aarohan means ascent. We started as a small construction firm and grew \
                         into five businesses that share one way of working."
                    </p>
                </div>
                <GlSurface build=CubeScene::build class="about-visual" parallax=true />
            </section>

            <section class="section values">
                <SectionHeader eyebrow="Values" title="What holds us together" />
                <div class="values-grid">
                    {VALUES
                        .iter()
                        .enumerate()
                        .map(|(i, (name, text))| view! {
                            <div class="value-card reveal" data-reveal-delay={(i * 100).to_string()}>
                                <h3>{*name}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section timeline">
                <SectionHeader eyebrow="Journey" title="Milestones" />
                <ol class="timeline-list">
                    {MILESTONES
                        .iter()
                        .map(|(year, text)| view! {
                            <li class="timeline-item reveal">
                                <span class="timeline-year">{*year}</span>
                                <p>{*text}</p>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </section>
        </PageShell>
    }
}
