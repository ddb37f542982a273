//! Routed pages: login (root), registration, and the session-gated
//! dashboard.

pub mod dashboard;
pub mod login;
pub mod register;
