//! Full-viewport hero banner.
//!
//! DESIGN
//! ======
//! The typed headline is driven by a single async loop that sleeps for
//! whatever delay the [`Typewriter`] stepper asks for, then advances it one
//! tick. The loop is torn down through an alive flag on cleanup. Particle
//! placements are generated once per mount; their drift is pure CSS.

use leptos::prelude::*;

use crate::components::icons::{CloudIcon, GitBranchIcon, MailIcon, RocketIcon, ServerIcon, TerminalIcon};
use crate::content;
use crate::state::ui::UiState;
use crate::util::particles;
use crate::util::scroll;
use crate::util::typewriter::Typewriter;

#[component]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let typed = RwSignal::new(Typewriter::new(content::ROTATING_TITLES));

    let type_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let type_alive_task = type_alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            let delay = typed.with_untracked(Typewriter::delay_ms);
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
            if !type_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            typed.update(Typewriter::advance);
        }
    });
    on_cleanup(move || type_alive.store(false, std::sync::atomic::Ordering::Relaxed));

    let sparkle = particles::generate(particles::PARTICLE_COUNT, js_sys::Date::now() as u64);

    view! {
        <section class="hero">
            <div class="hero__particles" aria-hidden="true">
                {sparkle
                    .into_iter()
                    .map(|p| {
                        let style = format!(
                            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; \
                             opacity: {:.2}; animation-duration: {:.1}s; animation-delay: {:.1}s;",
                            p.left_pct, p.top_pct, p.size_px, p.size_px, p.opacity, p.drift_s,
                            p.delay_s,
                        );
                        view! { <span class=format!("particle {}", p.tint) style=style></span> }
                    })
                    .collect_view()}
            </div>

            <div class="hero__blob hero__blob--one" aria-hidden="true"></div>
            <div class="hero__blob hero__blob--two" aria-hidden="true"></div>
            <div class="hero__blob hero__blob--three" aria-hidden="true"></div>

            <span class="hero__float hero__float--terminal" aria-hidden="true">
                <TerminalIcon class="icon--float-lg"/>
            </span>
            <span class="hero__float hero__float--cloud" aria-hidden="true">
                <CloudIcon class="icon--float-xl"/>
            </span>
            <span class="hero__float hero__float--server" aria-hidden="true">
                <ServerIcon class="icon--float-md"/>
            </span>
            <span class="hero__float hero__float--branch" aria-hidden="true">
                <GitBranchIcon class="icon--float-sm"/>
            </span>

            <div class="hero__content">
                <div class="hero__badge">
                    <span class="hero__wave">"👋"</span>
                    <span>{content::GREETING}</span>
                </div>

                <h1 class="hero__name">
                    "Hi, I'm " <span class="hero__name-accent">{content::NAME}</span>
                </h1>

                <div class="hero__typed">
                    <span class="hero__typed-text">
                        {move || typed.with(Typewriter::text)}
                        <span class="hero__cursor" aria-hidden="true"></span>
                    </span>
                </div>

                <p class="hero__tagline">{content::TAGLINE}</p>

                <div class="hero__actions">
                    <button
                        class="btn btn--primary btn--wide"
                        on:click=move |_| scroll::scroll_to_section("projects")
                    >
                        <RocketIcon/>
                        "See Projects"
                    </button>
                    <button
                        class="btn btn--secondary btn--wide"
                        on:click=move |_| ui.update(|u| u.contact_open = true)
                    >
                        <MailIcon/>
                        "Get in Touch"
                    </button>
                </div>
            </div>

            <div class="hero__scroll-hint" aria-hidden="true">
                <div class="hero__mouse">
                    <div class="hero__mouse-dot"></div>
                </div>
            </div>
        </section>
    }
}
