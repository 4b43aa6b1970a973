//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, health_handler, user_handler};
use crate::domain::{PublicUser, UserList};
use crate::types::{HealthResponse, MessageResponse};

/// OpenAPI documentation for the user directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory",
        version = "0.1.0",
        description = "In-memory user registry with registration, login and user management",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://127.0.0.1:5000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Health
        health_handler::health,
    ),
    components(
        schemas(
            // Domain types
            PublicUser,
            UserList,
            // Shared responses
            MessageResponse,
            HealthResponse,
            // Request bodies
            auth_handler::CredentialsRequest,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "User management operations"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_endpoints_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in ["/register", "/login", "/users", "/users/{email}", "/health"] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }
}
