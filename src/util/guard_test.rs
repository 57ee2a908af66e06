use super::*;
use crate::net::gateway_mock::sample_user;
use crate::net::types::UserRole;

fn session_with(role: UserRole) -> Session {
    Session {
        user: Some(sample_user("u", role)),
        is_authenticated: true,
        is_loading: false,
    }
}

#[test]
fn redirects_unauth_when_settled_without_user() {
    let session = Session::logged_out();
    assert!(should_redirect_unauth(&session));
}

#[test]
fn does_not_redirect_while_loading() {
    let session = Session {
        user: None,
        is_authenticated: false,
        is_loading: true,
    };
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn does_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&session_with(UserRole::User)));
}

#[test]
fn authenticated_requirement_follows_the_flag() {
    assert!(satisfies_role(&session_with(UserRole::User), RequiredRole::Authenticated));
    assert!(!satisfies_role(&Session::logged_out(), RequiredRole::Authenticated));
}

#[test]
fn author_requirement_admits_authors_and_admins() {
    assert!(satisfies_role(&session_with(UserRole::Author), RequiredRole::Author));
    assert!(satisfies_role(&session_with(UserRole::Admin), RequiredRole::Author));
    assert!(!satisfies_role(&session_with(UserRole::User), RequiredRole::Author));
}

#[test]
fn admin_requirement_admits_admins_only() {
    assert!(satisfies_role(&session_with(UserRole::Admin), RequiredRole::Admin));
    assert!(!satisfies_role(&session_with(UserRole::Author), RequiredRole::Admin));
    assert!(!satisfies_role(&Session::logged_out(), RequiredRole::Admin));
}
