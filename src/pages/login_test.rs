use super::*;

#[test]
fn hidden_password_uses_password_input_type() {
    assert_eq!(password_input_type(false), "password");
}

#[test]
fn shown_password_uses_text_input_type() {
    assert_eq!(password_input_type(true), "text");
}

#[test]
fn toggle_label_matches_visibility() {
    assert_eq!(toggle_label(false), "Show");
    assert_eq!(toggle_label(true), "Hide");
}
