//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalize an email for use as a directory key: trim, then lower-case.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    /// Stored verbatim. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Create a user, normalizing the email key.
    pub fn new(email: &str, password: impl Into<String>) -> Self {
        Self {
            email: normalize_email(email),
            password: password.into(),
        }
    }

    /// Replace the stored password
    pub fn change_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Exact, byte-for-byte password comparison
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Projection that is safe to return to any caller
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            email: self.email.clone(),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublicUser {
    /// Normalized email address
    #[schema(example = "user@example.com")]
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self { email: user.email }
    }
}

/// Listing of every user, public fields only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserList {
    /// Number of items
    #[schema(example = 1)]
    pub count: usize,
    pub items: Vec<PublicUser>,
}

impl From<Vec<PublicUser>> for UserList {
    fn from(items: Vec<PublicUser>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
