use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_on() {
    let state = UiState::default();
    assert!(state.dark_mode);
}

#[test]
fn ui_state_default_overlays_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
    assert!(!state.menu_open);
}

// =============================================================
// Behavior
// =============================================================

#[test]
fn close_overlays_resets_both_panels() {
    let mut state = UiState { dark_mode: false, sidebar_open: true, menu_open: true };
    state.close_overlays();
    assert!(!state.sidebar_open);
    assert!(!state.menu_open);
    assert!(!state.dark_mode);
}

#[test]
fn theme_toggle_label_offers_opposite_mode() {
    let dark = UiState::default();
    assert_eq!(dark.theme_toggle_label().1, "Switch to light mode");
    let light = UiState { dark_mode: false, ..UiState::default() };
    assert_eq!(light.theme_toggle_label().1, "Switch to dark mode");
}
