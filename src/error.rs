//!
//! # Error Handling
//!
//! This module defines the error type `ApiError` used throughout the crate.
//! Backend error bodies are decoded exactly once, at the transport boundary,
//! into the typed `ApiError::Api` variant; callers never probe response
//! JSON for nested optional fields themselves.
//!
//! `From` implementations for `reqwest::Error` and `serde_json::Error`
//! allow conversion with the `?` operator.

use std::collections::HashMap;
use std::fmt;

/// All errors a request through this crate can produce.
#[derive(Debug)]
pub enum ApiError {
    /// A non-2xx response from the backend, with the decoded error body.
    ///
    /// `message` is the backend's human-readable message, if it sent one.
    /// `errors` is the backend's field-level validation map (field name to
    /// message list), passed through without reinterpretation.
    Api {
        status: u16,
        message: Option<String>,
        errors: Option<HashMap<String, Vec<String>>>,
    },
    /// The request never produced a usable response (connection failure,
    /// timeout, undecodable success body).
    Transport(reqwest::Error),
    /// A request body could not be serialized.
    Serialization(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Api {
                status,
                message: Some(msg),
                ..
            } => write!(f, "API error {}: {}", status, msg),
            ApiError::Api { status, .. } => write!(f, "API error {}", status),
            ApiError::Transport(err) => write!(f, "Transport error: {}", err),
            ApiError::Serialization(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Api { .. } => None,
            ApiError::Transport(err) => Some(err),
            ApiError::Serialization(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> ApiError {
        ApiError::Transport(error)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> ApiError {
        ApiError::Serialization(error)
    }
}

impl ApiError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Serialization(_) => None,
        }
    }

    /// The backend-provided message field, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The backend's field-level validation map, if any.
    pub fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            ApiError::Api { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }

    /// True for an authorization failure (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_error() -> ApiError {
        let mut errors = HashMap::new();
        errors.insert(
            "password_confirmation".to_string(),
            vec!["must match password".to_string()],
        );
        ApiError::Api {
            status: 422,
            message: Some("Registration failed".to_string()),
            errors: Some(errors),
        }
    }

    #[test]
    fn test_accessors() {
        let error = validation_error();
        assert_eq!(error.status(), Some(422));
        assert_eq!(error.backend_message(), Some("Registration failed"));
        assert_eq!(
            error.field_errors().unwrap()["password_confirmation"],
            vec!["must match password".to_string()]
        );
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_display() {
        let error = validation_error();
        assert_eq!(error.to_string(), "API error 422: Registration failed");

        let bare = ApiError::Api {
            status: 500,
            message: None,
            errors: None,
        };
        assert_eq!(bare.to_string(), "API error 500");
    }

    #[test]
    fn test_unauthorized() {
        let error = ApiError::Api {
            status: 401,
            message: Some("Unauthenticated.".to_string()),
            errors: None,
        };
        assert!(error.is_unauthorized());
    }
}
