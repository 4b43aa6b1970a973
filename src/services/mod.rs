//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate validation and the user directory. They depend on
//! the [`UserDirectory`](crate::infra::UserDirectory) trait, not on a
//! concrete store.

mod auth_service;
pub mod container;
mod user_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, LoginOutcome};
pub use user_service::{UserManager, UserService};
