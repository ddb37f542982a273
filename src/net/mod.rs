//! Client for the managed identity & data service.
//!
//! SYSTEM CONTEXT
//! ==============
//! All authentication and persistence is delegated to a Supabase-style
//! backend: the auth API under `auth/v1` and the REST data API under
//! `rest/v1`. This module holds the endpoint configuration, the wire DTOs,
//! the access-token storage, and the typed HTTP operations.

pub mod api;
pub mod config;
pub mod token;
pub mod types;
