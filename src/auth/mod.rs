pub mod facade;
pub mod service;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::models::User;

// Re-export the operational surface
pub use facade::{AuthFacade, Navigator, Notifier, SessionTeardown, DASHBOARD_ROUTE, LOGIN_ROUTE};
pub use service::AuthService;
pub use store::{AuthOutcome, SessionStore};

/// Payload for a login request. Transient: never persisted anywhere.
#[derive(Debug, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Payload for a registration request. Transient: never persisted anywhere.
#[derive(Debug, Serialize)]
pub struct RegisterCredentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Response body of a successful login or registration.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_serialize_backend_field_names() {
        let credentials = RegisterCredentials {
            first_name: "Carl".to_string(),
            last_name: "Sagan".to_string(),
            email: "carl@gmail.com".to_string(),
            password: "secret".to_string(),
            password_confirmation: "secret".to_string(),
        };

        let value = serde_json::to_value(&credentials).unwrap();
        assert_eq!(value["first_name"], "Carl");
        assert_eq!(value["password_confirmation"], "secret");
    }

    #[test]
    fn test_auth_response_deserializes() {
        let raw = r#"{
            "user": {
                "id": 3,
                "first_name": "Carl",
                "last_name": "Sagan",
                "email": "carl@gmail.com",
                "created_at": "2025-01-05T12:00:00Z",
                "updated_at": "2025-01-05T12:00:00Z"
            },
            "token": "abc123"
        }"#;

        let response: AuthResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.user.id, 3);
        assert_eq!(response.token, "abc123");
    }
}
