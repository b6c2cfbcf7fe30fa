//!
//! # HTTP client wrapper
//!
//! Wraps [`reqwest`] with the cross-cutting behavior every TaskDeck request
//! needs: JSON headers, a marker header telling the backend this is not a
//! cookie session, a bearer token read from durable storage before each
//! request, and a global reaction to 401 responses.
//!
//! Cookies are never sent: authentication is bearer-token only, so the
//! client works across origins. (`reqwest` only sends cookies when a cookie
//! store is enabled, which this client does not do.)
//!
//! The 401 reaction is deliberately context-free: an unauthorized response
//! from ANY request publishes the session-invalidated event, even when the
//! trigger was a single stale background call. Exactly one subscriber
//! ([`crate::auth::facade::SessionTeardown`]) consumes the event, clearing
//! durable storage and forcing navigation to the login route. Callers must
//! tolerate that global redirect on any 401.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::storage::CredentialStore;

/// Marker header telling the backend's session detection that this client
/// is not a credential-cookie session.
const REQUESTED_WITH: &str = "XMLHttpRequest";

/// Receives the process-wide session-invalidated event raised whenever any
/// response comes back with HTTP 401.
pub trait InvalidationHandler: Send + Sync {
    fn session_invalidated(&self);
}

/// Shape of every backend error body, decoded once at this boundary.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<HashMap<String, Vec<String>>>,
}

/// HTTP client for the TaskDeck backend.
pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
    credentials: Arc<CredentialStore>,
    on_invalidated: Arc<dyn InvalidationHandler>,
}

impl HttpClient {
    pub fn new(
        base_url: &str,
        credentials: Arc<CredentialStore>,
        on_invalidated: Arc<dyn InvalidationHandler>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            inner: reqwest::Client::new(),
            credentials,
            on_invalidated,
        }
    }

    /// The configured backend base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, None).await?;
        Ok(response.json().await?)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::POST, path, body).await?;
        Ok(response.json().await?)
    }

    /// POST for endpoints that answer with 204/empty (e.g. logout).
    pub async fn post_no_content(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::POST, path, None).await?;
        Ok(())
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        let response = self.send(Method::PATCH, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Sends one request with the cross-cutting wrapping applied, returning
    /// the raw response only when the status was a success.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .inner
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .header("X-Requested-With", REQUESTED_WITH);

        // The token is read from durable storage on every request, not from
        // in-memory session state, so a freshly rehydrated or freshly torn
        // down session is picked up immediately.
        if let Some(token) = self.credentials.load_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.on_invalidated.session_invalidated();
        }

        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body.message,
                errors: body.errors,
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Noop;

    impl InvalidationHandler for Noop {
        fn session_invalidated(&self) {}
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let credentials = Arc::new(CredentialStore::new(dir.path().to_path_buf()));
        let client = HttpClient::new("http://localhost:8000/api/", credentials, Arc::new(Noop));

        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_error_body_tolerates_unknown_shapes() {
        let body: ErrorBody = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert!(body.message.is_none());
        assert!(body.errors.is_none());

        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Invalid credentials","errors":{"email":["taken"]}}"#)
                .unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
        assert_eq!(body.errors.unwrap()["email"], vec!["taken".to_string()]);
    }
}
