//! CI/CD pipeline illustration.

use leptos::prelude::*;

use crate::components::icons::{ArrowRightIcon, Glyph};
use crate::components::reveal::Reveal;
use crate::content;

/// Delivery-stage cards joined by arrows, with the headline stats below.
#[component]
pub fn PipelineSection() -> impl IntoView {
    let last = content::PIPELINE_STAGES.len() - 1;

    view! {
        <section id="pipeline" class="section pipeline">
            <div class="section__inner">
                <Reveal class="section__head">
                    <span class="section__kicker">"CI/CD Pipeline"</span>
                    <h2 class="section__title">
                        "How I " <span class="section__title-accent">"Ship Code"</span>
                    </h2>
                    <p class="section__lede">
                        "My automated pipeline ensures reliable, fast, and secure deployments"
                    </p>
                </Reveal>

                <div class="pipeline__track">
                    {content::PIPELINE_STAGES
                        .iter()
                        .enumerate()
                        .map(|(index, stage)| {
                            view! {
                                <Reveal class="pipeline__slot">
                                    <div class="stage-card">
                                        <span class="stage-card__number">{index + 1}</span>
                                        <div class="stage-card__tile">
                                            <Glyph kind=stage.icon class="icon--fill"/>
                                        </div>
                                        <h3 class="stage-card__label">{stage.label}</h3>
                                        <p class="stage-card__blurb">{stage.blurb}</p>
                                    </div>
                                    <Show when=move || index < last>
                                        <span class="pipeline__arrow">
                                            <ArrowRightIcon class="icon--lg"/>
                                        </span>
                                    </Show>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal class="pipeline__stats">
                    {content::PIPELINE_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat-card">
                                    <div class="stat-card__value">{stat.value}</div>
                                    <div class="stat-card__label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
