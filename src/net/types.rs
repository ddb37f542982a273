//! Wire DTOs and the service error type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::password::PASSWORD_RULE_MESSAGE;

/// Errors surfaced by the identity & data service client.
///
/// `Display` output is exactly the user-facing message, so pages render
/// errors with `to_string()` and remote messages pass through verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Local password-policy failure; no request was made.
    #[error("{}", PASSWORD_RULE_MESSAGE)]
    Validation,
    /// Auth API rejection, message verbatim from the service.
    #[error("{0}")]
    Identity(String),
    /// Data API rejection, message verbatim from the service.
    #[error("{0}")]
    Data(String),
    /// The request never got a service reply.
    #[error("{0}")]
    Transport(String),
}

/// Login/signup credentials. Transient: built from form state at submit
/// time, sent once, never persisted by this application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Authenticated user as returned by the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session returned by password login (and by signup when the service
/// auto-confirms the account).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// Result of identity creation: the issued reference plus a token when the
/// service auto-confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityCreated {
    pub id: String,
    pub access_token: Option<String>,
}

/// Profile row as read back by the dashboard.
///
/// Every field defaults so a sparse row renders as placeholders, not an
/// error. `age` tolerates number-or-string JSON: the form submits the raw
/// string and the service may coerce it to a number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, deserialize_with = "age_as_string")]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

fn age_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
