//! Resume link card.

use leptos::prelude::*;

use crate::components::icons::ExternalLinkIcon;
use crate::components::reveal::Reveal;
use crate::content;

#[component]
pub fn ResumeSection() -> impl IntoView {
    view! {
        <section id="resume" class="section resume">
            <div class="section__inner section__inner--narrow">
                <Reveal class="section__head">
                    <h2 class="section__title section__title--gradient">"Resume"</h2>
                    <p class="section__lede">"View my professional experience and qualifications"</p>
                </Reveal>

                <Reveal class="resume__card">
                    <div class="resume__icon">
                        <ExternalLinkIcon class="icon--xl"/>
                    </div>
                    <h3 class="resume__heading">"Download/View Resume"</h3>
                    <p class="resume__copy">
                        "Access my complete professional profile, skills, experience, and achievements"
                    </p>
                    <a
                        class="btn btn--primary"
                        href=content::RESUME_PDF
                        target="_blank"
                        rel="noreferrer"
                    >
                        "View Resume" <ExternalLinkIcon/>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
