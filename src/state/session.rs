#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::AuthUser;

/// Session context tracking the current user and loading status.
///
/// Provided as an `RwSignal` context at the app root; the dashboard updates
/// it from a fresh service query on entry, the session itself is owned
/// entirely by the remote service and never cached or refreshed locally.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Starts in `loading` so route guards never fire before the first
    /// session query resolves.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Record the result of a session query.
    pub fn resolved(&mut self, user: Option<AuthUser>) {
        self.user = user;
        self.loading = false;
    }

    /// Clear the session after sign-out.
    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
