//! Page footer with the contact call-to-action.
//!
//! Doubles as the `#contact` anchor target, so the navbar's Contact link
//! scrolls here rather than to a dedicated section.

use leptos::prelude::*;

use crate::components::icons::{ArrowUpIcon, CloudIcon, Glyph, MailIcon};
use crate::components::reveal::Reveal;
use crate::content;
use crate::state::ui::UiState;
use crate::util::scroll;

#[component]
pub fn Footer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id="contact" class="footer">
            <div class="footer__blob footer__blob--left"></div>
            <div class="footer__blob footer__blob--right"></div>

            <div class="footer__inner">
                <Reveal class="footer__cta">
                    <span class="section__kicker">"Get in Touch"</span>
                    <h2 class="section__title">
                        "Let's " <span class="section__title-accent">"Connect"</span>
                    </h2>
                    <p class="section__lede">
                        "Have a project in mind or want to discuss DevOps strategies? \
                         I'd love to hear from you."
                    </p>
                    <button
                        class="btn btn--primary btn--wide"
                        on:click=move |_| ui.update(|u| u.contact_open = true)
                    >
                        <MailIcon/>
                        "Get in Touch"
                    </button>
                </Reveal>

                <Reveal class="footer__socials">
                    {content::SOCIAL_LINKS
                        .iter()
                        .map(|social| {
                            view! {
                                <a class="footer__social" href=social.href aria-label=social.label>
                                    <Glyph kind=social.icon class="icon--lg"/>
                                </a>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <div class="footer__divider"></div>

                <div class="footer__base">
                    <p class="footer__made">
                        "Made with " <CloudIcon class="icon--accent"/> {format!(" by {}", content::NAME)}
                    </p>
                    <p class="footer__rights">{format!("© {year} All rights reserved")}</p>
                    <button
                        class="footer__top"
                        on:click=move |_| scroll::scroll_to_top()
                        aria-label="Scroll to top"
                    >
                        <ArrowUpIcon/>
                    </button>
                </div>
            </div>
        </footer>
    }
}
