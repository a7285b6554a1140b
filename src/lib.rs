//! # portfolio
//!
//! Leptos + WASM single-page portfolio site for a DevOps engineer,
//! rendered entirely in the browser.
//!
//! This crate contains the page sections, shared UI state, the contact-form
//! network types, and small browser utilities (typing effect, particle
//! field, scroll helpers). It is built with Trunk and mounted onto the
//! document body from the `portfolio` bin entrypoint.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// Installs panic and log hooks, then mounts the application.
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(|| leptos::view! { <crate::app::App/> });
}
