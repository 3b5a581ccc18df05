//! HTTP client for the parking API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with [`ApiError::Unavailable`]; the URL and
//! header helpers stay testable.
//!
//! AUTHORIZATION
//! =============
//! Each request re-reads the stored token and, when one is present, sends
//! `Authorization: Bearer <token>`. Nothing is cached, so login and logout
//! take effect on the next request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{ErrorBody, LoginRequest, LoginResponse, MessageResponse, SignupRequest};
use crate::config::ClientConfig;
use crate::state::session::Session;
use crate::state::store::SessionStore;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

impl ApiError {
    /// Build a status error, lifting the backend's `{"error": ...}` message when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| request_failed_message(status));
        Self::Status { status, message }
    }
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// API client bound to a configured origin and a session store.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    base_url: String,
    store: S,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(config: &ClientConfig, store: S) -> Self {
        Self { base_url: config.api_base_url.clone(), store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Absolute URL for an API `path`.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Header value for the current token, if any.
    pub fn authorization(&self) -> Option<String> {
        Session::load(&self.store).token.as_deref().map(bearer)
    }

    /// Exchange credentials for a token via `POST /api/auth/login`.
    ///
    /// The caller decides whether to persist the returned session.
    ///
    /// # Errors
    ///
    /// A 401 carries the backend's "Invalid credentials." message.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        self.post_json(LOGIN_ENDPOINT, &body).await
    }

    /// Register an account via `POST /api/auth/signup`.
    ///
    /// # Errors
    ///
    /// A 400 carries the backend's validation message.
    pub async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, ApiError> {
        self.post_json(SIGNUP_ENDPOINT, request).await
    }

    /// `POST path` with a JSON body, decoding a JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = gloo_net::http::Request::post(&self.url(path));
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let request = builder.json(body).map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                leptos::logging::warn!("POST {path} failed: {status}");
                return Err(ApiError::from_status(status, &text));
            }
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }
}
