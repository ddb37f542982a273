use super::*;
use crate::net::types::AuthUser;

fn user() -> AuthUser {
    AuthUser {
        id: "uid-42".to_owned(),
        email: Some("shopper@example.test".to_owned()),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_no_user_and_is_loading() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn resolved_stores_user_and_clears_loading() {
    let mut state = SessionState::default();
    state.resolved(Some(user()));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("uid-42"));
    assert!(!state.loading);
}

#[test]
fn resolved_with_none_clears_loading() {
    let mut state = SessionState::default();
    state.resolved(None);
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn signed_out_drops_user() {
    let mut state = SessionState::default();
    state.resolved(Some(user()));
    state.signed_out();
    assert!(state.user.is_none());
    assert!(!state.loading);
}
