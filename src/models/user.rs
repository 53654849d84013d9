//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing a registered community member.
///
/// The password is stored verbatim as submitted. It is never serialized into
/// responses, but it sits in the database in the clear - a known defect of
/// this site's authentication model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Email address (unique)
    pub email: String,
    /// Stored password, plaintext
    #[serde(skip_serializing)]
    pub password: String,
    /// Display name
    pub name: String,
    /// Registration timestamp
    pub date_joined: DateTime<Utc>,
}

/// Input for registering a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl NewUser {
    pub fn new(email: String, password: String, name: String) -> Self {
        Self {
            email,
            password,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_not_serialized() {
        let user = User {
            id: 1,
            email: "a@example.com".to_string(),
            password: "secret".to_string(),
            name: "A".to_string(),
            date_joined: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("a@example.com"));
    }
}
