//! Shared page state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui` carries the chrome flags (contact dialog, mobile menu), `toast` the
//! notification queue. Both live in `RwSignal`s created once in `App` and
//! handed down via `provide_context`.

pub mod toast;
pub mod ui;
