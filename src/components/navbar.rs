//! Fixed top navigation bar.
//!
//! Condenses once the page scrolls past a small threshold and collapses to
//! a hamburger menu on narrow viewports. Section links are plain anchors;
//! smooth scrolling comes from the stylesheet.

use leptos::prelude::*;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::Closure;

use crate::components::icons::{MenuIcon, TerminalIcon, XIcon};
use crate::content;
use crate::state::ui::UiState;
use crate::util::scroll;

/// Scroll depth in pixels past which the bar condenses.
const CONDENSE_AT_PX: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let condensed = RwSignal::new(false);

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::wrap(Box::new(move || {
            condensed.set(scroll::window_scroll_y() > CONDENSE_AT_PX);
        }) as Box<dyn FnMut()>);
        if window
            .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    });

    view! {
        <nav class="navbar" class:navbar--condensed=move || condensed.get()>
            <div class="navbar__inner">
                <a class="navbar__logo" href="#">
                    <span class="navbar__logo-tile">
                        <TerminalIcon/>
                    </span>
                    <span class="navbar__logo-text">{content::LOGO_HANDLE}</span>
                </a>

                <div class="navbar__links">
                    {content::NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a class="navbar__link" href=link.href>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="btn btn--primary btn--compact"
                        on:click=move |_| ui.update(|u| u.contact_open = true)
                    >
                        "Get in Touch"
                    </button>
                </div>

                <button
                    class="navbar__burger"
                    on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
                    aria-label="Toggle menu"
                >
                    <Show when=move || ui.get().mobile_menu_open fallback=|| view! { <MenuIcon/> }>
                        <XIcon/>
                    </Show>
                </button>
            </div>

            <Show when=move || ui.get().mobile_menu_open>
                <div class="navbar__menu">
                    {content::NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="navbar__menu-link"
                                    href=link.href
                                    on:click=move |_| ui.update(|u| u.mobile_menu_open = false)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            ui.update(|u| {
                                u.mobile_menu_open = false;
                                u.contact_open = true;
                            });
                        }
                    >
                        "Get in Touch"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
