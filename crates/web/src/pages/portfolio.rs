// =============================================================================
// Aarohan Web - Portfolio Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{PageShell, SectionHeader};
use crate::content::portfolio::{filter_categories, ALL_CATEGORIES};
use crate::content::{filter_projects, Project, PROJECTS};
use crate::routes::Page;
use crate::utils::pluralize;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let selected_category = RwSignal::new(ALL_CATEGORIES.to_string());

    // Filter on each change (local filtering for instant feedback)
    let filtered = Memo::new(move |_| {
        selected_category.with(|category| {
            filter_projects(PROJECTS, category)
                .into_iter()
                .copied()
                .collect::<Vec<Project>>()
        })
    });

    view! {
        <PageShell page=Page::Portfolio>
            <section class="page-hero portfolio-hero">
                <span class="hero-eyebrow reveal">"Portfolio"</span>
                <h1 class="reveal" data-reveal-delay="100">"Work we are proud of"</h1>
            </section>

            <section class="section portfolio">
                <SectionHeader eyebrow="Projects" title="Across every vertical" />

                <div class="category-filters reveal">
                    {filter_categories()
                        .map(|(id, label)| {
                            view! {
                                <button
                                    class="category-btn"
                                    class:active=move || selected_category.with(|c| c == id)
                                    on:click=move |_| selected_category.set(id.to_string())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="portfolio-count">
                    {move || pluralize(filtered.with(Vec::len), "project", "projects")}
                </p>

                <Show
                    when=move || filtered.with(|p| !p.is_empty())
                    fallback=|| view! {
                        <div class="empty-state">
                            <p>"No projects in this category yet. Check back soon."</p>
                        </div>
                    }
                >
                    <div class="project-grid">
                        <For
                            each=move || filtered.get()
                            key=|project| project.title
                            children=|project| view! { <ProjectCard project=project /> }
                        />
                    </div>
                </Show>
            </section>
        </PageShell>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <img src=project.image alt=project.title loading="lazy" />
            <div class="project-body">
                <span class="project-meta">{format!("{} · {}", project.category, project.year)}</span>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
            </div>
        </article>
    }
}
