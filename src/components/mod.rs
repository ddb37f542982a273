//! Presentational shell components shared across pages.

pub mod footer;
pub mod navbar;
