//! Transient page chrome state.
//!
//! DESIGN
//! ======
//! Two booleans cover every piece of chrome this page has. They stay in one
//! struct so the navbar, hero, and dialog all agree on who is visible, and
//! so opening the dialog can collapse the mobile menu in a single update.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome flags shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Contact dialog visibility.
    pub contact_open: bool,
    /// Mobile slide-down menu visibility.
    pub mobile_menu_open: bool,
}
