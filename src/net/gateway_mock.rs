//! Scripted [`Gateway`] for session-store tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::types::{AuthResponse, TokenPair, User, UserRole};

type MeResult = Result<User, ApiError>;

/// In-memory gateway whose responses are queued up by each test.
///
/// Calling an endpoint with no scripted response panics, which keeps tests
/// honest about exactly how many network calls an operation makes.
#[derive(Clone, Default)]
pub struct MockGateway {
    pub tokens: Arc<Mutex<Option<TokenPair>>>,
    pub login_results: Arc<Mutex<VecDeque<Result<AuthResponse, ApiError>>>>,
    pub register_results: Arc<Mutex<VecDeque<Result<AuthResponse, ApiError>>>>,
    pub me_results: Arc<Mutex<VecDeque<MeResult>>>,
    pub me_calls: Arc<AtomicUsize>,
    /// When set, the next `current_user` call suspends until the sender side
    /// resolves it. Used to interleave `logout` with an in-flight restore.
    pub me_gate: Arc<Mutex<Option<oneshot::Receiver<MeResult>>>>,
    /// Same, for `login`.
    pub login_gate: Arc<Mutex<Option<oneshot::Receiver<Result<AuthResponse, ApiError>>>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway that already holds a stored token pair.
    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        let gateway = Self::default();
        gateway.store_tokens(&TokenPair {
            access_token: access.to_owned(),
            refresh_token: refresh.to_owned(),
        });
        gateway
    }

    pub fn script_login(&self, result: Result<AuthResponse, ApiError>) {
        self.login_results.lock().unwrap().push_back(result);
    }

    pub fn script_register(&self, result: Result<AuthResponse, ApiError>) {
        self.register_results.lock().unwrap().push_back(result);
    }

    pub fn script_me(&self, result: MeResult) {
        self.me_results.lock().unwrap().push_back(result);
    }

    /// Make the next `current_user` call block until the returned sender is
    /// resolved.
    pub fn gate_me(&self) -> oneshot::Sender<MeResult> {
        let (tx, rx) = oneshot::channel();
        *self.me_gate.lock().unwrap() = Some(rx);
        tx
    }

    /// Make the next `login` call block until the returned sender is
    /// resolved.
    pub fn gate_login(&self) -> oneshot::Sender<Result<AuthResponse, ApiError>> {
        let (tx, rx) = oneshot::channel();
        *self.login_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn me_call_count(&self) -> usize {
        self.me_calls.load(Ordering::SeqCst)
    }

    pub fn stored_tokens(&self) -> Option<TokenPair> {
        self.tokens.lock().unwrap().clone()
    }
}

impl Gateway for MockGateway {
    fn has_credentials(&self) -> bool {
        self.tokens
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|pair| !pair.access_token.is_empty())
    }

    fn store_tokens(&self, tokens: &TokenPair) {
        *self.tokens.lock().unwrap() = Some(tokens.clone());
    }

    fn clear_tokens(&self) {
        *self.tokens.lock().unwrap() = None;
    }

    async fn login(&self, _username: &str, _password: &str) -> Result<AuthResponse, ApiError> {
        let gate = self.login_gate.lock().unwrap().take();
        if let Some(rx) = gate {
            return rx.await.expect("login gate dropped without a result");
        }
        self.login_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted login call")
    }

    async fn register(
        &self,
        _username: &str,
        _email: &str,
        _password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.register_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted register call")
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.me_gate.lock().unwrap().take();
        if let Some(rx) = gate {
            return rx.await.expect("me gate dropped without a result");
        }
        self.me_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted /auth/me call")
    }
}

/// Canonical user fixture shared by session tests.
pub fn sample_user(username: &str, role: UserRole) -> User {
    User {
        id: 1,
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        avatar_url: None,
        role,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

/// Auth response fixture wrapping [`sample_user`].
pub fn sample_auth_response(access: &str, refresh: &str, username: &str) -> AuthResponse {
    AuthResponse {
        access_token: access.to_owned(),
        refresh_token: refresh.to_owned(),
        user: sample_user(username, UserRole::User),
    }
}
