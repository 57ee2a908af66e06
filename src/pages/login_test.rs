use super::*;

#[test]
fn valid_input_is_trimmed() {
    assert_eq!(
        validate_login_input("  alice  ", "secret1"),
        Ok(("alice".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn missing_username_is_rejected() {
    assert_eq!(
        validate_login_input("   ", "secret1"),
        Err("Enter a username and password.")
    );
}

#[test]
fn missing_password_is_rejected() {
    assert_eq!(
        validate_login_input("alice", ""),
        Err("Enter a username and password.")
    );
}

#[test]
fn password_is_not_trimmed() {
    assert_eq!(
        validate_login_input("alice", " secret1 "),
        Ok(("alice".to_owned(), " secret1 ".to_owned()))
    );
}
