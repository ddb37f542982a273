use super::*;
use crate::util::password::PASSWORD_RULE_MESSAGE;

// =============================================================
// ServiceError display: messages pass through verbatim
// =============================================================

#[test]
fn identity_error_displays_service_message_exactly() {
    let err = ServiceError::Identity("Invalid login credentials".to_owned());
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[test]
fn data_error_displays_service_message_exactly() {
    let err = ServiceError::Data("duplicate key".to_owned());
    assert_eq!(err.to_string(), "duplicate key");
}

#[test]
fn validation_error_displays_the_fixed_policy_message() {
    assert_eq!(ServiceError::Validation.to_string(), PASSWORD_RULE_MESSAGE);
}

#[test]
fn transport_error_displays_carried_message() {
    let err = ServiceError::Transport("network error".to_owned());
    assert_eq!(err.to_string(), "network error");
}

// =============================================================
// DTO deserialization
// =============================================================

#[test]
fn auth_session_parses_token_and_user() {
    let session: AuthSession = serde_json::from_str(
        r#"{"access_token":"tok-1","token_type":"bearer","user":{"id":"uid-1","email":"a@b.test"}}"#,
    )
    .expect("session");
    assert_eq!(session.access_token, "tok-1");
    assert_eq!(session.user.id, "uid-1");
    assert_eq!(session.user.email.as_deref(), Some("a@b.test"));
}

#[test]
fn auth_user_email_is_optional() {
    let user: AuthUser = serde_json::from_str(r#"{"id":"uid-2"}"#).expect("user");
    assert!(user.email.is_none());
}

#[test]
fn profile_parses_full_row() {
    let profile: Profile = serde_json::from_str(
        r#"{"id":"uid-1","full_name":"Asha Iyer","age":"29","gender":"female",
            "city":"Pune","state":"Maharashtra","country":"India"}"#,
    )
    .expect("profile");
    assert_eq!(profile.full_name, "Asha Iyer");
    assert_eq!(profile.age, "29");
    assert_eq!(profile.country, "India");
}

#[test]
fn profile_age_tolerates_numeric_json() {
    let profile: Profile =
        serde_json::from_str(r#"{"id":"uid-1","age":29}"#).expect("profile");
    assert_eq!(profile.age, "29");
}

#[test]
fn profile_missing_fields_default_to_empty() {
    let profile: Profile = serde_json::from_str(r#"{"id":"uid-1"}"#).expect("profile");
    assert_eq!(profile.full_name, "");
    assert_eq!(profile.city, "");
    assert_eq!(profile.age, "");
}

#[test]
fn profile_null_age_defaults_to_empty() {
    let profile: Profile =
        serde_json::from_str(r#"{"id":"uid-1","age":null}"#).expect("profile");
    assert_eq!(profile.age, "");
}

#[test]
fn credentials_serialize_to_the_auth_payload() {
    let value = serde_json::to_value(Credentials {
        email: "a@b.test".to_owned(),
        password: "Passw0rd!".to_owned(),
    })
    .expect("serialize");
    assert_eq!(value["email"], "a@b.test");
    assert_eq!(value["password"], "Passw0rd!");
}
