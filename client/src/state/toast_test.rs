use super::*;

#[test]
fn success_and_error_use_kind_durations() {
    let mut state = ToastState::default();
    state.success("Login successful!");
    state.error("Failed to sync data");
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].kind, ToastKind::Success);
    assert_eq!(state.items[0].duration_ms, SUCCESS_DURATION_MS);
    assert_eq!(state.items[1].kind, ToastKind::Error);
    assert_eq!(state.items[1].duration_ms, ERROR_DURATION_MS);
}

#[test]
fn push_returns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.error("a");
    let b = state.error("b");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.success("a");
    let b = state.success("b");
    state.dismiss(&a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);

    state.dismiss("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn push_drops_oldest_past_visible_limit() {
    let mut state = ToastState::default();
    for i in 0..(MAX_VISIBLE + 2) {
        state.error(format!("toast {i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].message, "toast 2");
}

#[test]
fn kind_css_modifiers_are_distinct() {
    assert_ne!(ToastKind::Success.css_modifier(), ToastKind::Error.css_modifier());
}
