//!
//! # Auth facade
//!
//! Composes the session store with the UI-side collaborators (navigation
//! and toast notifications) into the single call surface components use.
//! The store's result object is returned unchanged, so callers that need
//! raw success/error data are not forced through the notification side
//! effects.

use std::sync::Arc;

use super::{AuthOutcome, LoginCredentials, RegisterCredentials, SessionStore};
use crate::http::InvalidationHandler;
use crate::storage::CredentialStore;

/// Route of the login entry point.
pub const LOGIN_ROUTE: &str = "/login";
/// Route reached after a successful login or registration.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Navigation collaborator (the UI's router).
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// User-facing notification collaborator (the UI's toast layer).
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Single subscriber of the session-invalidated event raised by the HTTP
/// layer on any 401: clears both durable slots and forces navigation to the
/// login route. In-memory store state is the navigation target's problem;
/// in a browser the forced redirect restarts the process.
pub struct SessionTeardown {
    credentials: Arc<CredentialStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionTeardown {
    pub fn new(credentials: Arc<CredentialStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            credentials,
            navigator,
        }
    }
}

impl InvalidationHandler for SessionTeardown {
    fn session_invalidated(&self) {
        self.credentials.clear();
        self.navigator.navigate(LOGIN_ROUTE);
    }
}

/// The call surface UI components talk to.
pub struct AuthFacade {
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl AuthFacade {
    pub fn new(
        store: SessionStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            navigator,
            notifier,
        }
    }

    /// Read access to the underlying session state.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    pub async fn login(&mut self, credentials: &LoginCredentials) -> AuthOutcome {
        let outcome = self.store.login(credentials).await;
        if outcome.success {
            self.notifier.notify_success("Logged in");
            self.navigator.navigate(DASHBOARD_ROUTE);
        } else if let Some(message) = &outcome.error {
            self.notifier.notify_error(message);
        }
        outcome
    }

    pub async fn register(&mut self, credentials: &RegisterCredentials) -> AuthOutcome {
        let outcome = self.store.register(credentials).await;
        if outcome.success {
            self.notifier.notify_success("Account created");
            self.navigator.navigate(DASHBOARD_ROUTE);
        } else if let Some(message) = &outcome.error {
            self.notifier.notify_error(message);
        }
        outcome
    }

    /// Logout always succeeds locally, so it always notifies and navigates.
    pub async fn logout(&mut self) {
        self.store.logout().await;
        self.notifier.notify_success("Logged out");
        self.navigator.navigate(LOGIN_ROUTE);
    }
}
