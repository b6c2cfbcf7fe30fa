//!
//! # Session store
//!
//! Owns the session aggregate (current user, token, loading flag, last
//! error) and is the only code that mutates it. Durable storage is touched
//! through exactly two paths, `set_auth` and `clear_auth`, which always
//! write or remove both slots together.
//!
//! `loading` is a UI hint, not a concurrency guard: two overlapping login
//! calls are not mutually excluded, and whichever response resolves last
//! wins the final state.

use std::collections::HashMap;
use std::sync::Arc;

use log::{error, warn};

use super::{AuthService, LoginCredentials, RegisterCredentials};
use crate::error::ApiError;
use crate::models::User;
use crate::storage::CredentialStore;

/// Result of a login or registration attempt, surfaced to the UI.
#[derive(Debug)]
pub struct AuthOutcome {
    pub success: bool,
    /// Display message extracted from the failure, if the attempt failed.
    pub error: Option<String>,
    /// The backend's field-level validation map, passed through verbatim.
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl AuthOutcome {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            errors: None,
        }
    }

    fn failed(message: String, errors: Option<HashMap<String, Vec<String>>>) -> Self {
        Self {
            success: false,
            error: Some(message),
            errors,
        }
    }
}

/// The process-wide session state.
pub struct SessionStore {
    service: AuthService,
    credentials: Arc<CredentialStore>,
    user: Option<User>,
    token: Option<String>,
    loading: bool,
    error: Option<String>,
}

impl SessionStore {
    /// Creates the store, picking up a persisted token if one exists.
    /// Call [`SessionStore::init_auth`] afterwards to rehydrate the user.
    pub fn new(service: AuthService, credentials: Arc<CredentialStore>) -> Self {
        let token = credentials.load_token();
        Self {
            service,
            credentials,
            user: None,
            token,
            loading: false,
            error: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Derived, never stored: authenticated means both a token and a user
    /// are present. Partial states do not outlive a request cycle.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub async fn login(&mut self, credentials: &LoginCredentials) -> AuthOutcome {
        self.loading = true;
        self.error = None;

        let result = self.service.login(credentials).await;
        self.loading = false;

        match result {
            Ok(response) => {
                self.set_auth(response.user, response.token);
                AuthOutcome::ok()
            }
            Err(err) => {
                let message = login_error_message(&err);
                self.error = Some(message.clone());
                AuthOutcome::failed(message, err.field_errors().cloned())
            }
        }
    }

    pub async fn register(&mut self, credentials: &RegisterCredentials) -> AuthOutcome {
        self.loading = true;
        self.error = None;

        let result = self.service.register(credentials).await;
        self.loading = false;

        match result {
            Ok(response) => {
                self.set_auth(response.user, response.token);
                AuthOutcome::ok()
            }
            Err(err) => {
                // Coarser fallback than login's; an inherited asymmetry UI
                // copy may depend on. See DESIGN.md.
                let message = err
                    .backend_message()
                    .map(str::to_owned)
                    .unwrap_or_else(|| "Registration failed".to_string());
                self.error = Some(message.clone());
                AuthOutcome::failed(message, err.field_errors().cloned())
            }
        }
    }

    /// Ends the session. A failing logout request is logged and swallowed,
    /// since logout must always succeed locally; the session is cleared
    /// unconditionally afterwards.
    pub async fn logout(&mut self) {
        if let Err(err) = self.service.logout().await {
            error!("logout request failed: {}", err);
        }
        self.clear_auth();
    }

    /// Rehydrates the user from durable storage at process start.
    ///
    /// Deliberately lazy: no `me()` call happens here, so a stale token is
    /// only discovered on the next request via the 401 interceptor.
    pub fn init_auth(&mut self) {
        if self.token.is_none() {
            return;
        }
        let Some(raw) = self.credentials.load_user_json() else {
            return;
        };
        match serde_json::from_str(&raw) {
            Ok(user) => self.user = Some(user),
            Err(err) => warn!("stored user record is unreadable: {}", err),
        }
    }

    /// Clears memory state and both durable slots. Idempotent.
    pub fn clear_auth(&mut self) {
        self.user = None;
        self.token = None;
        self.credentials.clear();
    }

    fn set_auth(&mut self, user: User, token: String) {
        match serde_json::to_string(&user) {
            Ok(user_json) => {
                if let Err(err) = self.credentials.store(&token, &user_json) {
                    warn!("failed to persist session: {}", err);
                }
            }
            Err(err) => warn!("failed to serialize user record: {}", err),
        }
        self.user = Some(user);
        self.token = Some(token);
    }
}

/// Display-message precedence for failed logins: the backend's message
/// field, then the transport error's own text, then a fallback embedding
/// the HTTP status (or "unknown" when none was received).
fn login_error_message(err: &ApiError) -> String {
    if let Some(message) = err.backend_message() {
        return message.to_string();
    }
    if let ApiError::Transport(inner) = err {
        return inner.to_string();
    }
    let status = err
        .status()
        .map(|status| status.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!("Request failed with status {}", status)
}
