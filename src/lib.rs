//! User Directory - A small user registry served over HTTP
//!
//! Users register with an email and password, log in, and can be listed,
//! fetched, updated and deleted. Everything lives in process memory.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User record, email normalization, validation rules
//! - **infra**: The user directory
//! - **services**: Registration, login and user management use cases
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default 127.0.0.1:5000
//! cargo run -- serve
//!
//! # Bind elsewhere
//! cargo run -- serve --host 0.0.0.0 --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{PublicUser, User};
pub use errors::{AppError, AppResult};
pub use infra::{InMemoryUserDirectory, UserDirectory};
