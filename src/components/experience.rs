//! Work experience timeline.

use leptos::prelude::*;

use crate::components::icons::{BriefcaseIcon, CalendarIcon, MapPinIcon};
use crate::components::reveal::Reveal;
use crate::content;

/// Renders the [`content::EXPERIENCE`] entries as highlight cards.
#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="section experience">
            <div class="section__inner">
                <Reveal class="section__head">
                    <h2 class="section__title section__title--gradient">"Experience"</h2>
                    <p class="section__lede">"Professional journey and key achievements"</p>
                </Reveal>

                <div class="experience__list">
                    {content::EXPERIENCE
                        .iter()
                        .map(|job| {
                            view! {
                                <Reveal class="job-card">
                                    <div class="job-card__head">
                                        <div>
                                            <h3 class="job-card__title">{job.title}</h3>
                                            <div class="job-card__meta">
                                                <span class="job-card__meta-item">
                                                    <BriefcaseIcon/>
                                                    <span class="job-card__company">{job.company}</span>
                                                </span>
                                                <span class="job-card__meta-item">
                                                    <MapPinIcon/>
                                                    {job.location}
                                                </span>
                                            </div>
                                        </div>
                                        <span class="job-card__period">
                                            <CalendarIcon/>
                                            {job.period}
                                        </span>
                                    </div>
                                    <ul class="job-card__highlights">
                                        {job.highlights
                                            .iter()
                                            .map(|point| view! { <li>{*point}</li> })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
