use super::*;

#[test]
fn auth_url_targets_auth_v1() {
    assert!(auth_url("signup").ends_with("/auth/v1/signup"));
    assert!(auth_url("token?grant_type=password").ends_with("/auth/v1/token?grant_type=password"));
}

#[test]
fn rest_url_targets_rest_v1() {
    assert!(rest_url("profiles").ends_with("/rest/v1/profiles"));
}

#[test]
fn urls_have_no_double_slash_after_base() {
    let url = auth_url("user");
    let after_scheme = url.split_once("://").map_or(url.as_str(), |(_, rest)| rest);
    assert!(!after_scheme.contains("//"), "unexpected double slash in {url}");
}

#[test]
fn anon_key_is_nonempty() {
    assert!(!anon_key().is_empty());
}
