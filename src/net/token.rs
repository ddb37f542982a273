//! Access-token persistence in `localStorage`.
//!
//! The token returned by password login (or by an auto-confirming signup)
//! is stored and replayed verbatim as a bearer value. It is never decoded,
//! inspected, or refreshed; "is there a current user" is always answered by
//! a fresh service query. Requires a browser environment; server-side these
//! are no-ops.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "shopsaas_access_token";

/// Read the stored access token, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist an access token.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored access token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
