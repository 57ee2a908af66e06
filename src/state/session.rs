//! Auth-session state and lifecycle for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! One store instance is created by the composition root and handed to pages
//! through context; route guards and user-aware components read it to
//! coordinate login redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! The store delegates credential custody and network calls to a
//! [`Gateway`], and mirrors `{user, is_authenticated}` into durable storage
//! after every transition so a reload can render an optimistic session
//! before `restore()` reconciles with the backend.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::types::{AuthResponse, TokenPair, User, UserRole};
use crate::util::storage::{self, StringStore};

/// Storage key for the persisted [`SessionSnapshot`].
const SNAPSHOT_KEY: &str = "blog.session";

/// The current visitor's authentication state.
///
/// Invariant: `is_authenticated` implies `user.is_some()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// True iff the current user's role is `admin`.
    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role == UserRole::Admin)
    }

    /// True iff the current user may author posts (`author` or `admin`).
    pub fn is_author(&self) -> bool {
        self.user.as_ref().is_some_and(|user| {
            matches!(user.role, UserRole::Author | UserRole::Admin)
        })
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

/// The subset of [`Session`] persisted across reloads.
///
/// Read once at startup to paint an optimistic UI; never trusted as
/// authoritative — `restore()` reconciles against the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl SessionSnapshot {
    fn into_session(self) -> Session {
        // A snapshot claiming authentication without a user is corrupt;
        // degrade to logged out rather than violate the invariant.
        let is_authenticated = self.is_authenticated && self.user.is_some();
        Session {
            user: self.user,
            is_authenticated,
            is_loading: false,
        }
    }
}

/// Process-wide authority for "who is the visitor and are they logged in".
///
/// Operations are expected to be invoked sequentially by the UI (submit
/// controls are disabled while `is_loading`); overlapping calls from the
/// same epoch are last-write-wins. `logout` bumps the epoch so in-flight
/// completions from before it can never resurrect a session.
#[derive(Clone)]
pub struct SessionStore<G: Gateway> {
    gateway: G,
    storage: Arc<dyn StringStore + Send + Sync>,
    state: ArcRwSignal<Session>,
    epoch: Arc<AtomicU64>,
}

impl<G: Gateway> SessionStore<G> {
    /// Create a store, hydrating optimistically from the persisted snapshot
    /// when one exists.
    pub fn new(gateway: G, storage: Arc<dyn StringStore + Send + Sync>) -> Self {
        let initial = storage::load_json::<SessionSnapshot>(storage.as_ref(), SNAPSHOT_KEY)
            .map_or_else(Session::logged_out, SessionSnapshot::into_session);
        Self {
            gateway,
            storage,
            state: ArcRwSignal::new(initial),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Reactive handle to the session, for components and guards.
    pub fn state(&self) -> ArcRwSignal<Session> {
        self.state.clone()
    }

    /// Non-reactive read of the current session.
    pub fn current(&self) -> Session {
        self.state.get_untracked()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Tracked projection: current user's role is `admin`.
    pub fn is_admin(&self) -> bool {
        self.state.with(Session::is_admin)
    }

    /// Tracked projection: current user may author posts.
    pub fn is_author(&self) -> bool {
        self.state.with(Session::is_author)
    }

    fn commit(&self, apply: impl FnOnce(&mut Session)) {
        self.state.update(apply);
        let snapshot = self.state.with_untracked(Session::snapshot);
        storage::save_json(self.storage.as_ref(), SNAPSHOT_KEY, &snapshot);
    }

    /// Authenticate with a username and password.
    ///
    /// On success stores the returned token pair and adopts the user. On
    /// failure only `is_loading` is reset; the error propagates so the page
    /// can display its message.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure, with the backend's `detail` verbatim
    /// for credential rejections.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let epoch = self.epoch.load(Ordering::SeqCst);
        self.commit(|session| session.is_loading = true);
        let result = self.gateway.login(username, password).await;
        self.finish_auth(epoch, result)
    }

    /// Create an account and authenticate in one step.
    ///
    /// Password confirmation and minimum length are the calling page's
    /// responsibility; this store submits whatever it is given.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionStore::login`].
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let epoch = self.epoch.load(Ordering::SeqCst);
        self.commit(|session| session.is_loading = true);
        let result = self.gateway.register(username, email, password).await;
        self.finish_auth(epoch, result)
    }

    fn finish_auth(
        &self,
        epoch: u64,
        result: Result<AuthResponse, ApiError>,
    ) -> Result<(), ApiError> {
        let stale = self.epoch.load(Ordering::SeqCst) != epoch;
        match result {
            Ok(response) => {
                if stale {
                    // A logout raced this completion; the logged-out state wins.
                    return Ok(());
                }
                self.gateway.store_tokens(&TokenPair {
                    access_token: response.access_token.clone(),
                    refresh_token: response.refresh_token.clone(),
                });
                self.commit(|session| {
                    session.user = Some(response.user);
                    session.is_authenticated = true;
                    session.is_loading = false;
                });
                Ok(())
            }
            Err(err) => {
                if !stale {
                    self.commit(|session| session.is_loading = false);
                }
                Err(err)
            }
        }
    }

    /// Drop the session locally. Synchronous and infallible.
    ///
    /// Server-side teardown is a separate best-effort call
    /// ([`crate::net::api::ApiClient::logout_notify`]); local state never
    /// waits on it.
    pub fn logout(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.gateway.clear_tokens();
        self.commit(|session| *session = Session::logged_out());
    }

    /// Reconcile the session with the backend. Safe to call on every mount.
    ///
    /// Without stored credentials this resets to logged-out with no network
    /// call. A rejected or unreachable `/auth/me` clears the stored tokens
    /// and degrades silently to logged-out — token expiry is an expected
    /// condition, not an error to surface.
    pub async fn restore(&self) {
        if !self.gateway.has_credentials() {
            self.commit(|session| *session = Session::logged_out());
            return;
        }
        let epoch = self.epoch.load(Ordering::SeqCst);
        let result = self.gateway.current_user().await;
        if self.epoch.load(Ordering::SeqCst) != epoch {
            return;
        }
        match result {
            Ok(user) => self.commit(|session| {
                session.user = Some(user);
                session.is_authenticated = true;
                session.is_loading = false;
            }),
            Err(err) => {
                log::debug!("session restore failed, logging out: {err}");
                self.gateway.clear_tokens();
                self.commit(|session| *session = Session::logged_out());
            }
        }
    }
}
