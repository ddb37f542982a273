//! HTTP operations against the identity & data service.
//!
//! Client-side (hydrate): real calls via `gloo-net`. Server-side (SSR):
//! stubs, since every operation is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Remote rejection bodies are reduced to the service's own message so the
//! pages can show it verbatim. Operations that gate rendering rather than a
//! submission (`current_user`, `fetch_profile`) return `Option` and degrade
//! to "not present" on any failure.

#![allow(clippy::unused_async)]

use super::types::{AuthSession, AuthUser, Credentials, IdentityCreated, Profile, ServiceError};
use crate::state::signup::ProfileRecord;

/// Extract a user-facing message from an error response body.
///
/// The auth API uses `msg` / `error_description` / `error`, the data API
/// uses `message`; fall back to the status code when the body carries none
/// of them.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.trim().is_empty() {
                    return text.to_owned();
                }
            }
        }
    }
    format!("HTTP {status}")
}

/// Pull the identity reference (and token, when present) out of a signup
/// response. Auto-confirming deployments return a session envelope
/// (`{access_token, user: {id}}`); confirmation-required deployments return
/// the bare user object (`{id}`).
pub(crate) fn parse_signup_response(body: &str) -> Option<IdentityCreated> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(user) = value.get("user") {
        let id = user.get("id")?.as_str()?.to_owned();
        let access_token = value
            .get("access_token")
            .and_then(|v| v.as_str())
            .map(str::to_owned);
        return Some(IdentityCreated { id, access_token });
    }
    let id = value.get("id")?.as_str()?.to_owned();
    Some(IdentityCreated { id, access_token: None })
}

/// `Authorization` value: the stored session token when present, the anon
/// key otherwise.
#[cfg(feature = "hydrate")]
fn bearer() -> String {
    match super::token::read() {
        Some(token) => format!("Bearer {token}"),
        None => format!("Bearer {}", super::config::anon_key()),
    }
}

/// Create an identity from the credentials via `POST auth/v1/signup`.
///
/// # Errors
///
/// `ServiceError::Identity` with the service message when the signup is
/// rejected, `ServiceError::Transport` when no reply arrived.
pub async fn create_identity(credentials: &Credentials) -> Result<IdentityCreated, ServiceError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&super::config::auth_url("signup"))
            .header("apikey", super::config::anon_key())
            .json(credentials)
            .map_err(|e| ServiceError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(ServiceError::Identity(error_message(status, &body)));
        }
        parse_signup_response(&body)
            .ok_or_else(|| ServiceError::Identity("signup response had no user id".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ServiceError::Transport("not available on server".to_owned()))
    }
}

/// Authenticate via `POST auth/v1/token?grant_type=password`.
///
/// # Errors
///
/// `ServiceError::Identity` with the service message (e.g. "Invalid login
/// credentials") on rejection, `ServiceError::Transport` when no reply
/// arrived.
pub async fn authenticate(credentials: &Credentials) -> Result<AuthSession, ServiceError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&super::config::auth_url("token?grant_type=password"))
            .header("apikey", super::config::anon_key())
            .json(credentials)
            .map_err(|e| ServiceError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(ServiceError::Identity(error_message(status, &body)));
        }
        serde_json::from_str::<AuthSession>(&body)
            .map_err(|e| ServiceError::Identity(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ServiceError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the currently authenticated user from `GET auth/v1/user`.
/// Returns `None` when no token is stored, on any failure, or on the server.
pub async fn current_user() -> Option<AuthUser> {
    #[cfg(feature = "hydrate")]
    {
        let token = super::token::read()?;
        let resp = gloo_net::http::Request::get(&super::config::auth_url("user"))
            .header("apikey", super::config::anon_key())
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AuthUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign out via `POST auth/v1/logout`. Fire-and-forget: the outcome is
/// ignored and the stored token is always cleared.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = super::token::read() {
            let _ = gloo_net::http::Request::post(&super::config::auth_url("logout"))
                .header("apikey", super::config::anon_key())
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await;
        }
    }
    super::token::clear();
}

/// Insert one profile row via `POST rest/v1/profiles`.
///
/// # Errors
///
/// `ServiceError::Data` with the service message (e.g. a duplicate-key
/// violation) on rejection, `ServiceError::Transport` when no reply
/// arrived.
pub async fn insert_profile(record: &ProfileRecord) -> Result<(), ServiceError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&super::config::rest_url("profiles"))
            .header("apikey", super::config::anon_key())
            .header("Authorization", &bearer())
            .header("Prefer", "return=minimal")
            .json(record)
            .map_err(|e| ServiceError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ServiceError::Data(error_message(status, &body)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        Err(ServiceError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the single profile row keyed by an identity reference.
/// Returns `None` when no row exists, on any failure, or on the server.
pub async fn fetch_profile(id: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::config::rest_url(&format!("profiles?id=eq.{id}&select=*"));
        let resp = gloo_net::http::Request::get(&url)
            .header("apikey", super::config::anon_key())
            .header("Authorization", &bearer())
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
