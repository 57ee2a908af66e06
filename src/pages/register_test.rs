use super::*;

#[test]
fn valid_input_passes() {
    let input = validate_register_input(" alice ", " a@x.com ", "secret1", "secret1").unwrap();
    assert_eq!(
        input,
        RegisterInput {
            username: "alice".to_owned(),
            email: "a@x.com".to_owned(),
            password: "secret1".to_owned(),
        }
    );
}

#[test]
fn mismatched_passwords_are_rejected() {
    assert_eq!(
        validate_register_input("alice", "a@x.com", "secret1", "secret2"),
        Err("Passwords do not match.")
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_register_input("alice", "a@x.com", "12345", "12345"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn six_character_password_is_the_floor() {
    assert!(validate_register_input("alice", "a@x.com", "123456", "123456").is_ok());
}

#[test]
fn empty_fields_are_rejected() {
    assert_eq!(
        validate_register_input("", "a@x.com", "secret1", "secret1"),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_register_input("alice", "  ", "secret1", "secret1"),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_register_input("alice", "a@x.com", "", ""),
        Err("All fields are required.")
    );
}

#[test]
fn mismatch_is_reported_before_length() {
    assert_eq!(
        validate_register_input("alice", "a@x.com", "12345", "54321"),
        Err("Passwords do not match.")
    );
}
