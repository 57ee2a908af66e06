//! REST gateway client for the blog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the stored
//! access token attached as a bearer header. Server-side (SSR): stubs
//! returning transport errors, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the backend's
//! `detail` message verbatim; nothing here retries. Retry policy, if any,
//! belongs to callers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::net::gateway::Gateway;
use crate::net::types::{
    AuthResponse, Category, Comment, CreateCategoryRequest, CreateCommentRequest,
    CreatePostRequest, CreateTagRequest, LoginRequest, Media, Paginated, Post, PostStatus,
    RegisterRequest, Tag, TokenPair, UpdateCategoryRequest, UpdatePostRequest, UpdateTagRequest,
    User,
};
use crate::util::storage::{self, StringStore};

/// Single storage key holding the serialized [`TokenPair`].
const TOKEN_KEY: &str = "blog.tokens";

/// Default mount point of the backend API.
pub const DEFAULT_BASE: &str = "/api";

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

fn bearer_value(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// Append query parameters to a path. Values are numbers and enum names, so
/// no percent-encoding is needed here.
fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_owned();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available on server".to_owned()))
}

/// HTTP client that owns credential custody for the whole app.
///
/// The sole place that knows how tokens are persisted and how they are
/// attached to outbound requests. Cloning shares the underlying store.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    store: Arc<dyn StringStore + Send + Sync>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, store: Arc<dyn StringStore + Send + Sync>) -> Self {
        Self { base: base.into(), store }
    }

    /// Client talking to [`DEFAULT_BASE`] with `localStorage` persistence.
    pub fn browser() -> Self {
        Self::new(DEFAULT_BASE, Arc::new(storage::BrowserStorage))
    }

    // ---------------------------------------------------------
    // Credential custody
    // ---------------------------------------------------------

    /// Persist a token pair; later requests attach the access token.
    pub fn set_tokens(&self, access: &str, refresh: &str) {
        let pair = TokenPair {
            access_token: access.to_owned(),
            refresh_token: refresh.to_owned(),
        };
        storage::save_json(self.store.as_ref(), TOKEN_KEY, &pair);
    }

    /// Drop the stored token pair; later requests carry no credential.
    pub fn clear_tokens(&self) {
        self.store.remove(TOKEN_KEY);
    }

    /// The stored token pair, if any.
    pub fn tokens(&self) -> Option<TokenPair> {
        storage::load_json(self.store.as_ref(), TOKEN_KEY)
    }

    fn access_token(&self) -> Option<String> {
        let pair = self.tokens()?;
        if pair.access_token.is_empty() {
            None
        } else {
            Some(pair.access_token)
        }
    }

    /// Local presence check of a non-empty access token. Says nothing about
    /// whether the backend still accepts it.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    // ---------------------------------------------------------
    // Verbs
    // ---------------------------------------------------------

    #[cfg(feature = "hydrate")]
    fn builder(&self, method: gloo_net::http::Method, path: &str) -> gloo_net::http::RequestBuilder {
        let url = endpoint(&self.base, path);
        let mut builder = gloo_net::http::RequestBuilder::new(&url).method(method);
        if let Some(token) = self.access_token() {
            builder = builder.header("Authorization", &bearer_value(&token));
        }
        builder
    }

    #[cfg(feature = "hydrate")]
    async fn run<T: DeserializeOwned>(
        request: Result<gloo_net::http::Request, gloo_net::Error>,
    ) -> Result<T, ApiError> {
        let request = request.map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(response.status(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET {path}`, decoding a JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            Self::run(self.builder(gloo_net::http::Method::GET, path).build()).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            server_stub()
        }
    }

    /// `POST {path}` with an optional JSON body, decoding a JSON response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = self.builder(gloo_net::http::Method::POST, path);
            let request = match body {
                Some(body) => builder.json(body),
                None => builder.build(),
            };
            Self::run(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            server_stub()
        }
    }

    /// `PUT {path}` with a JSON body, decoding a JSON response.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            Self::run(self.builder(gloo_net::http::Method::PUT, path).json(body)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            server_stub()
        }
    }

    /// Perform a request whose success response carries no body of interest.
    #[cfg(feature = "hydrate")]
    async fn run_no_content(
        request: Result<gloo_net::http::Request, gloo_net::Error>,
    ) -> Result<(), ApiError> {
        let request = request.map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(response.status(), &body));
        }
        Ok(())
    }

    /// `DELETE {path}`, ignoring any response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            Self::run_no_content(self.builder(gloo_net::http::Method::DELETE, path).build()).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            server_stub()
        }
    }

    /// Multipart upload of a single file.
    ///
    /// `on_progress` receives a non-decreasing completion fraction in
    /// `[0, 1]`. The fetch API exposes no granular upload progress, so it is
    /// called once with `1.0` when the transfer completes.
    #[cfg(feature = "hydrate")]
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file: &web_sys::File,
        on_progress: Option<&dyn Fn(f64)>,
    ) -> Result<T, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Transport("form allocation failed".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Transport("form append failed".to_owned()))?;
        let request = self
            .builder(gloo_net::http::Method::POST, path)
            .body(wasm_bindgen::JsValue::from(form));
        let result = Self::run(request).await;
        if result.is_ok() {
            if let Some(callback) = on_progress {
                callback(1.0);
            }
        }
        result
    }

    // ---------------------------------------------------------
    // Typed endpoints
    // ---------------------------------------------------------

    /// Best-effort server-side session teardown. Failures are logged and
    /// dropped; local logout never depends on it.
    pub async fn logout_notify(&self) {
        #[cfg(feature = "hydrate")]
        {
            let request = self.builder(gloo_net::http::Method::POST, "/auth/logout").build();
            if let Err(err) = Self::run_no_content(request).await {
                log::debug!("logout notify failed: {err}");
            }
        }
    }

    pub async fn list_posts(
        &self,
        page: u32,
        size: u32,
        status: Option<PostStatus>,
    ) -> Result<Paginated<Post>, ApiError> {
        let mut params = vec![("page", page.to_string()), ("size", size.to_string())];
        if let Some(status) = status {
            params.push(("status", status.as_str().to_owned()));
        }
        self.get(&with_query("/posts", &params)).await
    }

    pub async fn post_by_id(&self, id: i64) -> Result<Post, ApiError> {
        self.get(&format!("/posts/{id}")).await
    }

    pub async fn post_by_slug(&self, slug: &str) -> Result<Post, ApiError> {
        self.get(&format!("/posts/slug/{slug}")).await
    }

    pub async fn create_post(&self, req: &CreatePostRequest) -> Result<Post, ApiError> {
        self.post("/posts", Some(req)).await
    }

    pub async fn update_post(&self, id: i64, req: &UpdatePostRequest) -> Result<Post, ApiError> {
        self.put(&format!("/posts/{id}"), req).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/posts/{id}")).await
    }

    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.get(&format!("/posts/{post_id}/comments")).await
    }

    pub async fn create_comment(&self, req: &CreateCommentRequest) -> Result<Comment, ApiError> {
        self.post("/comments", Some(req)).await
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/comments/{id}")).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    pub async fn category_by_id(&self, id: i64) -> Result<Category, ApiError> {
        self.get(&format!("/categories/{id}")).await
    }

    pub async fn create_category(&self, req: &CreateCategoryRequest) -> Result<Category, ApiError> {
        self.post("/categories", Some(req)).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        self.put(&format!("/categories/{id}"), req).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/categories/{id}")).await
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get("/tags").await
    }

    pub async fn tag_by_id(&self, id: i64) -> Result<Tag, ApiError> {
        self.get(&format!("/tags/{id}")).await
    }

    pub async fn create_tag(&self, req: &CreateTagRequest) -> Result<Tag, ApiError> {
        self.post("/tags", Some(req)).await
    }

    pub async fn update_tag(&self, id: i64, req: &UpdateTagRequest) -> Result<Tag, ApiError> {
        self.put(&format!("/tags/{id}"), req).await
    }

    pub async fn delete_tag(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/tags/{id}")).await
    }

    pub async fn list_media(&self, page: u32, size: u32) -> Result<Paginated<Media>, ApiError> {
        let params = [("page", page.to_string()), ("size", size.to_string())];
        self.get(&with_query("/media/list", &params)).await
    }

    #[cfg(feature = "hydrate")]
    pub async fn upload_media(
        &self,
        file: &web_sys::File,
        on_progress: Option<&dyn Fn(f64)>,
    ) -> Result<Media, ApiError> {
        self.upload("/media/upload", file, on_progress).await
    }

    pub async fn delete_media(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/media/{id}")).await
    }
}

impl Gateway for ApiClient {
    fn has_credentials(&self) -> bool {
        self.is_authenticated()
    }

    fn store_tokens(&self, tokens: &TokenPair) {
        self.set_tokens(&tokens.access_token, &tokens.refresh_token);
    }

    fn clear_tokens(&self) {
        ApiClient::clear_tokens(self);
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let req = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        self.post("/auth/login", Some(&req)).await
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let req = RegisterRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.post("/auth/register", Some(&req)).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }
}
