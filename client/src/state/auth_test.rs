use super::*;

fn admin() -> Session {
    Session {
        email: "admin@platform.test".to_owned(),
        role: Role::Admin,
        access_token: "a".to_owned(),
        token_type: "Bearer".to_owned(),
        extra: serde_json::Map::new(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_not_loaded() {
    let state = AuthState::default();
    assert!(!state.loaded);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn loaded_marks_storage_read() {
    let state = AuthState::loaded(None);
    assert!(state.loaded);
    assert!(state.role().is_none());
}

#[test]
fn sign_in_then_sign_out() {
    let mut state = AuthState::default();
    state.sign_in(admin());
    assert!(state.loaded);
    assert_eq!(state.role(), Some(&Role::Admin));

    state.sign_out();
    assert!(state.loaded);
    assert!(!state.is_authenticated());
    assert!(state.signed_out);

    state.sign_in(admin());
    assert!(!state.signed_out);
}

#[test]
fn reading_storage_is_not_a_sign_out() {
    assert!(!AuthState::loaded(None).signed_out);
}
