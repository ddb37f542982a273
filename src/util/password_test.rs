use super::*;

// =============================================================
// Policy: length
// =============================================================

#[test]
fn rejects_short_passwords() {
    assert!(!is_valid(""));
    assert!(!is_valid("Ab1@"));
    assert!(!is_valid("Abcde1@")); // 7 chars, all classes present
}

#[test]
fn accepts_exactly_eight_chars_with_all_classes() {
    assert!(is_valid("Abcdef1@"));
}

// =============================================================
// Policy: character classes
// =============================================================

#[test]
fn rejects_missing_lowercase() {
    assert!(!is_valid("ABCDEF1@"));
}

#[test]
fn rejects_missing_uppercase() {
    assert!(!is_valid("abcdef1@"));
}

#[test]
fn rejects_missing_digit() {
    assert!(!is_valid("Abcdefg@"));
}

#[test]
fn rejects_missing_special_char() {
    assert!(!is_valid("Abcdefg1"));
}

#[test]
fn special_char_outside_the_fixed_set_does_not_count() {
    // '#' is not in the accepted set.
    assert!(!is_valid("Abcdefg1#"));
}

#[test]
fn accepts_each_special_from_the_set() {
    for special in ["@", "$", "!", "%", "*", "?", "&"] {
        let candidate = format!("Abcdefg1{special}");
        assert!(is_valid(&candidate), "expected {candidate:?} to pass");
    }
}

#[test]
fn rejects_obviously_weak_password() {
    assert!(!is_valid("weak"));
}

#[test]
fn accepts_longer_mixed_password() {
    assert!(is_valid("Passw0rd!extra?"));
}
