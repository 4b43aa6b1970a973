//! Domain layer - Core business entities and logic
//!
//! This module contains the user record, its public projection and the
//! validation rules applied before any directory mutation.

pub mod user;
pub mod validation;

pub use user::{normalize_email, PublicUser, User, UserList};
pub use validation::{is_valid_email, is_valid_password, PasswordChange, Registration};
