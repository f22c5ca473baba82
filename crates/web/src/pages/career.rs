// =============================================================================
// Aarohan Web - Career Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{ButtonVariant, LinkButton, PageShell, SectionHeader};
use crate::content::{Vertical, OPENINGS};
use crate::routes::Page;
use crate::utils::contact_topic_link;

const PERKS: &[&str] = &[
    "Move between verticals as you grow",
    "Annual learning budget",
    "Health cover for you and your family",
    "Flexible and remote-friendly teams",
];

#[component]
pub fn CareerPage() -> impl IntoView {
    view! {
        <PageShell page=Page::Career>
            <section class="page-hero career-hero">
                <span class="hero-eyebrow reveal">"Careers"</span>
                <h1 class="reveal" data-reveal-delay="100">"Climb with us"</h1>
                <p class="reveal" data-reveal-delay="200">
                    "Five businesses, one career. Join a team that invests in people for the long haul."
                </p>
            </section>

            <section class="section perks">
                <SectionHeader eyebrow="Why Aarohan" title="What you can expect" />
                <ul class="perk-list">
                    {PERKS.iter().map(|perk| view! { <li class="reveal">{*perk}</li> }).collect_view()}
                </ul>
            </section>

            <section class="section openings">
                <SectionHeader eyebrow="Open roles" title="Current openings" />
                <div class="opening-list">
                    {OPENINGS
                        .iter()
                        .map(|opening| {
                            let vertical = Vertical::find(opening.vertical)
                                .map(|v| v.name)
                                .unwrap_or(opening.vertical);
                            view! {
                                <article class="opening-card reveal">
                                    <div class="opening-head">
                                        <h3>{opening.title}</h3>
                                        <span class="opening-meta">
                                            {format!("{} · {} · {}", vertical, opening.location, opening.kind)}
                                        </span>
                                    </div>
                                    <p>{opening.summary}</p>
                                    <LinkButton
                                        href=contact_topic_link("careers")
                                        label="Apply"
                                        variant=ButtonVariant::Secondary
                                    />
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </PageShell>
    }
}
