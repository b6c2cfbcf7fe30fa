use std::sync::Arc;

use serde::Deserialize;

use super::{AuthResponse, LoginCredentials, RegisterCredentials};
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::User;

#[derive(Debug, Deserialize)]
struct RefreshedToken {
    token: String,
}

/// Stateless mapping of the auth endpoints to HTTP calls.
///
/// No retry, no caching; errors propagate unchanged to the session store,
/// which extracts display messages from them.
pub struct AuthService {
    http: Arc<HttpClient>,
}

impl AuthService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(credentials)?;
        self.http.post("/login", Some(body)).await
    }

    pub async fn register(
        &self,
        credentials: &RegisterCredentials,
    ) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(credentials)?;
        self.http.post("/register", Some(body)).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.http.post_no_content("/logout").await
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.http.get("/me").await
    }

    pub async fn refresh_token(&self) -> Result<String, ApiError> {
        let refreshed: RefreshedToken = self.http.post("/refresh", None).await?;
        Ok(refreshed.token)
    }
}
