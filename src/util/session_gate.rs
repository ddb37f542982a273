//! Route-guard predicate for session-gated pages.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use crate::state::session::SessionState;

/// True when the session query has resolved and no user is present.
///
/// [`SessionState`] defaults to `loading`, so the guard never fires before
/// the dashboard's first session query completes.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}
