//! Authentication service - Registration and credential checks.
//!
//! Passwords are stored and compared verbatim. There is no hashing and no
//! session or token issuance: a successful login is only a 200.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{BYPASS_EMAIL, BYPASS_PASSWORD};
use crate::domain::{normalize_email, Registration};
use crate::errors::{AppError, AppResult};
use crate::infra::UserDirectory;

/// How a login was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Matched the built-in test account
    TestAccount,
    /// Matched a registered user
    Registered,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user. Returns the normalized email.
    async fn register(&self, email: &str, password: &str) -> AppResult<String>;

    /// Check credentials
    async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome>;
}

/// Concrete implementation of AuthService over a [`UserDirectory`].
pub struct Authenticator {
    directory: Arc<dyn UserDirectory>,
}

impl Authenticator {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, email: &str, password: &str) -> AppResult<String> {
        let registration = Registration::parse(email, password).map_err(|e| {
            tracing::debug!(error = %e, "Registration rejected");
            e
        })?;

        if !self
            .directory
            .create(&registration.email, &registration.password)
            .await
        {
            tracing::debug!(email = %registration.email, "Email already registered");
            return Err(AppError::email_taken());
        }

        tracing::info!(email = %registration.email, "User registered");
        Ok(registration.email)
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let email = normalize_email(email);

        if email == BYPASS_EMAIL && password == BYPASS_PASSWORD {
            tracing::info!("Test account login");
            return Ok(LoginOutcome::TestAccount);
        }

        if self.directory.check_credentials(&email, password).await {
            tracing::info!(email = %email, "Login succeeded");
            Ok(LoginOutcome::Registered)
        } else {
            tracing::warn!(email = %email, "Login failed");
            Err(AppError::InvalidCredentials)
        }
    }
}
