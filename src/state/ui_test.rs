use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_everything_closed() {
    let state = UiState::default();
    assert!(!state.contact_open);
    assert!(!state.mobile_menu_open);
}

#[test]
fn ui_state_flags_are_independent() {
    let state = UiState {
        contact_open: true,
        mobile_menu_open: false,
    };
    assert!(state.contact_open);
    assert!(!state.mobile_menu_open);
}
