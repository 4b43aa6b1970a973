//! User directory - In-memory store of user records keyed by normalized email.
//!
//! Every operation normalizes the email it is given, so callers may pass raw
//! input. Each call is atomic with respect to the others; sequences of calls
//! are not.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{normalize_email, PublicUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Directory of registered users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Insert a new user. False, with no change, if the email is taken.
    async fn create(&self, email: &str, password: &str) -> bool;

    /// Look up a user by email
    async fn get(&self, email: &str) -> Option<User>;

    /// Overwrite a user's password. False if the email is unknown.
    async fn update(&self, email: &str, new_password: &str) -> bool;

    /// Remove a user. False if the email is unknown.
    async fn delete(&self, email: &str) -> bool;

    /// True iff the user exists and the stored password equals `password` exactly.
    async fn check_credentials(&self, email: &str, password: &str) -> bool;

    /// Snapshot of all users' public fields, in insertion order.
    async fn list_public(&self) -> Vec<PublicUser>;

    /// Number of stored users
    async fn len(&self) -> usize;

    /// Whether no user is stored
    async fn is_empty(&self) -> bool;
}

#[derive(Debug, Default)]
struct Records {
    by_email: HashMap<String, User>,
    /// Keys of `by_email` in insertion order.
    order: Vec<String>,
}

/// Process-local [`UserDirectory`]. Empty at start, lost at exit.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    records: RwLock<Records>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn create(&self, email: &str, password: &str) -> bool {
        let key = normalize_email(email);
        let mut records = self.records.write().await;

        if records.by_email.contains_key(&key) {
            return false;
        }

        records.order.push(key.clone());
        records.by_email.insert(key, User::new(email, password));
        true
    }

    async fn get(&self, email: &str) -> Option<User> {
        let key = normalize_email(email);
        self.records.read().await.by_email.get(&key).cloned()
    }

    async fn update(&self, email: &str, new_password: &str) -> bool {
        let key = normalize_email(email);
        let mut records = self.records.write().await;

        match records.by_email.get_mut(&key) {
            Some(user) => {
                user.change_password(new_password);
                true
            }
            None => false,
        }
    }

    async fn delete(&self, email: &str) -> bool {
        let key = normalize_email(email);
        let mut records = self.records.write().await;

        if records.by_email.remove(&key).is_none() {
            return false;
        }

        records.order.retain(|k| k != &key);
        true
    }

    async fn check_credentials(&self, email: &str, password: &str) -> bool {
        let key = normalize_email(email);
        self.records
            .read()
            .await
            .by_email
            .get(&key)
            .is_some_and(|user| user.password_matches(password))
    }

    async fn list_public(&self) -> Vec<PublicUser> {
        let records = self.records.read().await;

        records
            .order
            .iter()
            .filter_map(|key| records.by_email.get(key))
            .map(User::to_public)
            .collect()
    }

    async fn len(&self) -> usize {
        self.records.read().await.by_email.len()
    }

    async fn is_empty(&self) -> bool {
        self.records.read().await.by_email.is_empty()
    }
}
