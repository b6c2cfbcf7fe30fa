use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user's identity record, as returned by the backend.
///
/// Immutable once fetched except by re-fetch or re-login. Owned exclusively
/// by the session store; UI code only ever holds a read reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trips_through_json() {
        let raw = r#"{
            "id": 3,
            "first_name": "Carl",
            "last_name": "Sagan",
            "email": "carl@gmail.com",
            "created_at": "2025-01-05T12:00:00Z",
            "updated_at": "2025-01-05T12:00:00Z"
        }"#;

        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.email, "carl@gmail.com");
        assert!(user.email_verified_at.is_none());

        let serialized = serde_json::to_string(&user).unwrap();
        let reparsed: User = serde_json::from_str(&serialized).unwrap();
        assert_eq!(reparsed, user);
    }
}
