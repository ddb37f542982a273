//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so pages can depend on small focused models:
//! `session` holds the explicit session context provided at the app root,
//! `signup` holds the registration attempt's phase machine.

pub mod session;
pub mod signup;
