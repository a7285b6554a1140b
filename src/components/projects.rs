//! Featured project gallery.

use leptos::prelude::*;

use crate::components::icons::{ArrowUpRightIcon, ExternalLinkIcon};
use crate::components::reveal::Reveal;
use crate::content;

/// Project cards with tag chips and a writeup link per project.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <div class="section__inner">
                <Reveal class="section__head">
                    <span class="section__kicker">"Featured Work"</span>
                    <h2 class="section__title">
                        "My " <span class="section__title-accent">"Projects"</span>
                    </h2>
                    <p class="section__lede">
                        "A selection of projects showcasing my expertise in full-stack development, \
                         computer vision, and web applications"
                    </p>
                </Reveal>

                <div class="projects__grid">
                    {content::PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <Reveal class="project-card">
                                    <div class="project-card__media">
                                        <img
                                            class="project-card__image"
                                            src=project.image_url
                                            alt=project.title
                                            loading="lazy"
                                        />
                                    </div>
                                    <div class="project-card__body">
                                        <h3 class="project-card__title">{project.title}</h3>
                                        <p class="project-card__summary">{project.summary}</p>
                                        <div class="project-card__tags">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! { <span class="project-card__tag">{*tag}</span> }
                                                })
                                                .collect_view()}
                                        </div>
                                        <a
                                            class="project-card__view"
                                            href=project.writeup_pdf
                                            target="_blank"
                                            rel="noreferrer"
                                        >
                                            "View " <ExternalLinkIcon class="icon--xs"/>
                                        </a>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal class="projects__more">
                    <a class="btn btn--outline" href="#">
                        "View All Projects" <ArrowUpRightIcon/>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
