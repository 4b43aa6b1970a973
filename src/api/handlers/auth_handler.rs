//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::config::{MSG_LOGIN_OK, MSG_LOGIN_OK_TEST_USER, MSG_REGISTERED};
use crate::errors::AppResult;
use crate::services::LoginOutcome;
use crate::types::MessageResponse;

/// Email and password, both required
#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    /// Email address, trimmed and lower-cased before use
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Password (minimum 4 characters on registration)
    #[schema(example = "Test123", min_length = 4)]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing fields, invalid email or short password", body = MessageResponse),
        (status = 409, description = "Email already registered", body = MessageResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .auth_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok(Json(MessageResponse::new(MSG_REGISTERED)))
}

/// Check credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login successful", body = MessageResponse),
        (status = 400, description = "Missing fields", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> AppResult<Json<MessageResponse>> {
    let outcome = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    let msg = match outcome {
        LoginOutcome::TestAccount => MSG_LOGIN_OK_TEST_USER,
        LoginOutcome::Registered => MSG_LOGIN_OK,
    };

    Ok(Json(MessageResponse::new(msg)))
}
