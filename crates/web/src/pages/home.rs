// =============================================================================
// Aarohan Web - Home Page
// =============================================================================
// Table of Contents:
// 1. Hero
// 2. Verticals Overview
// 3. Numbers
// 4. Call to Action
// =============================================================================

use leptos::prelude::*;

use crate::components::{ButtonVariant, LinkButton, PageShell, SectionHeader, Typewriter};
use crate::content::VERTICALS;
use crate::graphics::{GlSurface, InfinityScene, LogoScene, ParticleField};
use crate::routes::Page;
use crate::utils::services_link;

const HERO_LINE: &str = "Five ventures. One ascent.";

const NUMBERS: &[(&str, &str)] = &[
    ("5", "Verticals"),
    ("1,200+", "People"),
    ("40+", "Cities served"),
    ("18", "Years building"),
];

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell page=Page::Home>
            // Hero
            <section class="hero">
                <ParticleField class="hero-particles" />
                <div class="hero-content">
                    <span class="hero-eyebrow reveal">"Aarohan Group"</span>
                    <h1 class="hero-title">
                        <Typewriter text=HERO_LINE />
                    </h1>
                    <p class="hero-subtitle reveal" data-reveal-delay="200">
                        "Wellness, technology, infrastructure, media and capital, \
                         held together by a shared commitment to building what lasts."
                    </p>
                    <div class="hero-actions reveal" data-reveal-delay="350">
                        <LinkButton href=Page::Services.path() label="Explore our work" />
                        <LinkButton href=Page::Contact.path() label="Talk to us" variant=ButtonVariant::Ghost />
                    </div>
                </div>
                <GlSurface build=LogoScene::build class="hero-visual" parallax=true />
            </section>

            // Verticals Overview
            <section class="section verticals-overview">
                <SectionHeader
                    eyebrow="What we do"
                    title="One group, many disciplines"
                    lead="Each vertical runs independently and shares the group's people, capital and standards."
                />
                <div class="vertical-grid">
                    {VERTICALS
                        .iter()
                        .enumerate()
                        .map(|(i, vertical)| {
                            view! {
                                <a
                                    href=services_link(vertical.id)
                                    class="vertical-card reveal"
                                    data-reveal-delay={(i * 100).to_string()}
                                >
                                    <img src=vertical.image alt="" loading="lazy" />
                                    <h3>{vertical.name}</h3>
                                    <p>{vertical.headline}</p>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            // Numbers
            <section class="section numbers">
                <div class="numbers-visual">
                    <GlSurface build=InfinityScene::build class="numbers-scene" />
                </div>
                <div class="numbers-grid">
                    {NUMBERS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="number-card reveal">
                                    <span class="number-value">{*value}</span>
                                    <span class="number-label">{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            // Call to Action
            <section class="section cta reveal">
                <h2>"Building something that should last?"</h2>
                <p>"We partner early and stay for the long run."</p>
                <LinkButton href=Page::Contact.path() label="Start a conversation" />
            </section>
        </PageShell>
    }
}
