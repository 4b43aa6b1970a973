//! Service container - Centralized service access.
//!
//! Builds every service over one shared [`UserDirectory`], so all handlers
//! see the same users.

use std::sync::Arc;

use super::{AuthService, Authenticator, UserManager, UserService};
use crate::infra::{InMemoryUserDirectory, UserDirectory};

/// Concrete service container
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(auth_service: Arc<dyn AuthService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            auth_service,
            user_service,
        }
    }

    /// Build all services over the given directory
    pub fn from_directory(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(directory.clone())),
            user_service: Arc::new(UserManager::new(directory)),
        }
    }

    /// Build all services over a fresh, empty in-memory directory
    pub fn in_memory() -> Self {
        Self::from_directory(Arc::new(InMemoryUserDirectory::new()))
    }

    /// Get authentication service
    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    /// Get user service
    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
