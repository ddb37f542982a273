//! Password policy validation.
//!
//! The only genuinely local business logic in the application: everything
//! else is delegated to the remote identity & data service. Pure function,
//! no side effects, no network access.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Fixed user-facing message shown when a candidate password fails the policy.
pub const PASSWORD_RULE_MESSAGE: &str =
    "Password must be 8+ characters, include uppercase, lowercase, number and special character.";

/// Special characters the policy accepts.
const SPECIAL: &str = "@$!%*?&";

/// Check a candidate password against the signup policy: at least 8
/// characters, with at least one ASCII lowercase letter, one uppercase
/// letter, one digit, and one character from [`SPECIAL`].
pub fn is_valid(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL.contains(c))
}
