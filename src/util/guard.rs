//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior for
//! unauthenticated visitors and for authenticated visitors lacking a role.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Role a route requires, checked against the session's projections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredRole {
    /// Any authenticated user.
    Authenticated,
    /// `author` or `admin`.
    Author,
    /// `admin` only.
    Admin,
}

/// Whether a guard should redirect to `/login`.
///
/// Never redirects while a login/restore round trip is in flight, so an
/// optimistic session is not bounced before reconciliation finishes.
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.is_loading && session.user.is_none()
}

/// Whether the session satisfies `required`.
pub fn satisfies_role(session: &Session, required: RequiredRole) -> bool {
    match required {
        RequiredRole::Authenticated => session.is_authenticated,
        RequiredRole::Author => session.is_author(),
        RequiredRole::Admin => session.is_admin(),
    }
}

/// Redirect to `/login` whenever the session settles with no user.
pub fn install_unauth_redirect<F>(session: ArcRwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/login` whenever the session settles without `required`.
pub fn install_role_redirect<F>(
    session: ArcRwSignal<Session>,
    required: RequiredRole,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.is_loading && !satisfies_role(&state, required) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
