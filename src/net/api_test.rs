use super::*;

// =============================================================
// Error-body message extraction
// =============================================================

#[test]
fn error_message_prefers_msg_field() {
    let body = r#"{"msg":"User already registered","message":"other"}"#;
    assert_eq!(error_message(422, body), "User already registered");
}

#[test]
fn error_message_reads_message_field() {
    let body = r#"{"message":"duplicate key"}"#;
    assert_eq!(error_message(409, body), "duplicate key");
}

#[test]
fn error_message_reads_error_description() {
    let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
    // `error_description` carries the human-readable text; the bare `error`
    // code is only a fallback.
    assert_eq!(error_message(400, body), "Invalid login credentials");
}

#[test]
fn error_message_reads_bare_error_field() {
    let body = r#"{"error":"invalid_grant"}"#;
    assert_eq!(error_message(400, body), "invalid_grant");
}

#[test]
fn error_message_falls_back_to_status_for_non_json() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "HTTP 502");
}

#[test]
fn error_message_falls_back_to_status_for_empty_fields() {
    assert_eq!(error_message(500, r#"{"message":"   "}"#), "HTTP 500");
}

// =============================================================
// Signup response parsing
// =============================================================

#[test]
fn parses_session_envelope_with_token() {
    let body = r#"{"access_token":"tok-1","user":{"id":"uid-1","email":"a@b.test"}}"#;
    let created = parse_signup_response(body).expect("identity");
    assert_eq!(created.id, "uid-1");
    assert_eq!(created.access_token.as_deref(), Some("tok-1"));
}

#[test]
fn parses_bare_user_object_without_token() {
    let body = r#"{"id":"uid-2","email":"b@c.test","confirmation_sent_at":"2026-01-01T00:00:00Z"}"#;
    let created = parse_signup_response(body).expect("identity");
    assert_eq!(created.id, "uid-2");
    assert!(created.access_token.is_none());
}

#[test]
fn rejects_response_without_user_id() {
    assert!(parse_signup_response(r#"{"access_token":"tok-1","user":{}}"#).is_none());
    assert!(parse_signup_response("{}").is_none());
    assert!(parse_signup_response("not json").is_none());
}
