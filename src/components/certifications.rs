//! Professional certification cards.

use leptos::prelude::*;

use crate::components::icons::{BadgeCheckIcon, ExternalLinkIcon};
use crate::components::reveal::Reveal;
use crate::content;

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section id="certifications" class="section certifications">
            <div class="section__inner">
                <Reveal class="section__head">
                    <h2 class="section__title section__title--gradient">"Certifications"</h2>
                    <p class="section__lede">"Professional credentials and achievements"</p>
                </Reveal>

                <div class="certifications__grid">
                    {content::CERTIFICATIONS
                        .iter()
                        .map(|cert| {
                            view! {
                                <Reveal class="cert-card">
                                    <div class="cert-card__head">
                                        <div class="cert-card__badge">
                                            <BadgeCheckIcon class="icon--lg"/>
                                        </div>
                                        <div>
                                            <h3 class="cert-card__title">{cert.title}</h3>
                                            <p class="cert-card__issuer">{cert.issuer}</p>
                                        </div>
                                        <span class="cert-card__year">{cert.year}</span>
                                    </div>
                                    <div class="cert-card__foot">
                                        <span class="cert-card__credential">
                                            {format!("Credential ID: {}", cert.credential_id)}
                                        </span>
                                        <a class="cert-card__verify" href=cert.verify_url>
                                            "Verify " <ExternalLinkIcon class="icon--xs"/>
                                        </a>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
