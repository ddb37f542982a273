//! Service endpoint configuration.
//!
//! The project URL and publishable anon key are baked in at compile time
//! via `SUPABASE_URL` / `SUPABASE_ANON_KEY`, with local-dev defaults
//! matching a stock `supabase start` instance.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_ANON_KEY: &str = "sb_publishable_dev_key";

/// Base URL of the service, without a trailing slash.
pub fn base_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or(DEFAULT_URL)
}

/// Publishable (anon) API key sent with every request.
pub fn anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or(DEFAULT_ANON_KEY)
}

/// Build an auth API endpoint URL, e.g. `auth_url("signup")`.
pub fn auth_url(path: &str) -> String {
    format!("{}/auth/v1/{path}", base_url().trim_end_matches('/'))
}

/// Build a data API endpoint URL, e.g. `rest_url("profiles")`.
pub fn rest_url(path: &str) -> String {
    format!("{}/rest/v1/{path}", base_url().trim_end_matches('/'))
}
