//! Skills grid with filter tabs.

use leptos::prelude::*;

use crate::components::icons::Glyph;
use crate::components::reveal::Reveal;
use crate::content::{self, SkillArea};

/// Filterable grid of tooling skills.
///
/// Tab state lives here; the filtering itself is [`content::matching_skills`]
/// so it stays testable without a DOM.
#[component]
pub fn SkillsSection() -> impl IntoView {
    let active = RwSignal::new(None::<SkillArea>);

    view! {
        <section id="skills" class="section skills">
            <div class="section__inner">
                <Reveal class="section__head">
                    <span class="section__kicker">"Tech Stack"</span>
                    <h2 class="section__title">
                        "My " <span class="section__title-accent">"Skills"</span>
                    </h2>
                    <p class="section__lede">
                        "Technologies and tools I use to build and maintain scalable infrastructure"
                    </p>
                </Reveal>

                <Reveal class="skills__tabs">
                    {content::SKILL_TABS
                        .iter()
                        .map(|(area, label)| {
                            let area = *area;
                            view! {
                                <button
                                    class="skills__tab"
                                    class:skills__tab--active=move || active.get() == area
                                    on:click=move |_| active.set(area)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <div class="skills__grid">
                    <For
                        each=move || content::matching_skills(active.get())
                        key=|skill| skill.name
                        children=move |skill| {
                            view! {
                                <div class="skill-card">
                                    <div class="skill-card__tile">
                                        <Glyph kind=skill.icon class="icon--fill"/>
                                    </div>
                                    <span class="skill-card__name">{skill.name}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
