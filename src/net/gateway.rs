//! Transport seam between the session store and the auth backend.
//!
//! DESIGN
//! ======
//! The session store only ever talks to this trait, so session logic can be
//! exercised against a scripted mock while the real implementation
//! ([`crate::net::api::ApiClient`]) owns the HTTP and token-persistence
//! details.

use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, TokenPair, User};

/// Auth operations plus local credential custody.
///
/// `has_credentials` is a pure presence check of a non-empty access token;
/// it never verifies validity. `store_tokens`/`clear_tokens` are synchronous
/// and idempotent.
#[allow(async_fn_in_trait)]
pub trait Gateway: Clone + 'static {
    fn has_credentials(&self) -> bool;
    fn store_tokens(&self, tokens: &TokenPair);
    fn clear_tokens(&self);

    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError>;
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError>;
    /// `GET /auth/me` with the stored access token attached.
    async fn current_user(&self) -> Result<User, ApiError>;
}
