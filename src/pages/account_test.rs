use super::*;

#[test]
fn password_change_requires_the_current_password() {
    assert_eq!(
        password_error("", "secret1", "secret1"),
        Some("Enter your current password")
    );
}

#[test]
fn password_change_enforces_minimum_length() {
    assert_eq!(
        password_error("old", "12345", "12345"),
        Some("New password must be at least 6 characters")
    );
}

#[test]
fn password_change_requires_matching_confirmation() {
    assert_eq!(
        password_error("old", "secret1", "secret2"),
        Some("Password confirmation does not match")
    );
    assert_eq!(password_error("old", "secret1", "secret1"), None);
}
