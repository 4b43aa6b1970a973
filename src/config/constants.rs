//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Separator for the `CORS_ALLOWED_ORIGINS` list
pub const CORS_ORIGIN_SEPARATOR: char = ',';

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Email shape check. Anchored at the start only, so anything may trail a match.
pub const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+";

// =============================================================================
// Authentication
// =============================================================================

/// Test account that always authenticates, whatever the directory holds
pub const BYPASS_EMAIL: &str = "user@test.com";

/// Password paired with [`BYPASS_EMAIL`]
pub const BYPASS_PASSWORD: &str = "Test123";

// =============================================================================
// Client Messages
// =============================================================================

pub const MSG_MISSING_FIELDS: &str = "Missing fields";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 4 characters";
pub const MSG_EMAIL_TAKEN: &str = "Email already registered";
pub const MSG_NOT_FOUND: &str = "Not found";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_INTERNAL: &str = "An internal error occurred";

pub const MSG_REGISTERED: &str = "User registered successfully";
pub const MSG_LOGIN_OK: &str = "Login successful";
pub const MSG_LOGIN_OK_TEST_USER: &str = "Login successful (test user)";
pub const MSG_UPDATED: &str = "Updated";
pub const MSG_DELETED: &str = "Deleted";

/// Body of the health endpoint
pub const HEALTH_STATUS_OK: &str = "ok";
