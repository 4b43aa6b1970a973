//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{AuthService, Services, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Loaded configuration
    pub config: Config,
}

impl AppState {
    /// Create application state backed by a fresh in-memory directory.
    pub fn from_config(config: Config) -> Self {
        Self::new(&Services::in_memory(), config)
    }

    /// Create application state from an existing service container.
    pub fn new(services: &Services, config: Config) -> Self {
        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            config,
        }
    }
}
