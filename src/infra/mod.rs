//! Infrastructure layer - Storage behind the services
//!
//! Holds the user directory. State lives in process memory only.

pub mod directory;

pub use directory::{InMemoryUserDirectory, UserDirectory};

#[cfg(any(test, feature = "test-utils"))]
pub use directory::MockUserDirectory;
