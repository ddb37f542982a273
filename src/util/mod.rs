//! Pure helpers with no network or UI dependencies.

pub mod password;
pub mod session_gate;
