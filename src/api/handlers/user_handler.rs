//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::api::extractors::from_object;
use crate::api::AppState;
use crate::config::{MSG_DELETED, MSG_UPDATED};
use crate::domain::{PublicUser, UserList};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Password change request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New password (minimum 4 characters)
    #[serde(default)]
    #[schema(example = "NewPass1", min_length = 4)]
    pub password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users)).route(
        "/users/:email",
        get(get_user).put(update_user).delete(delete_user),
    )
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, emails only", body = UserList)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UserList>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get a user by email
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User found", body = PublicUser),
        (status = 404, description = "No such user", body = MessageResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<PublicUser>> {
    let user = state.user_service.get_user(&email).await?;
    Ok(Json(user))
}

/// Change a user's password
///
/// A missing or unreadable body, or one that is not a JSON object, counts
/// as an empty password.
#[utoipa::path(
    put,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 400, description = "Password too short", body = MessageResponse),
        (status = 404, description = "No such user", body = MessageResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    payload: Option<Json<Value>>,
) -> AppResult<Json<MessageResponse>> {
    let password = payload
        .and_then(|Json(body)| from_object::<UpdateUserRequest>(body).ok())
        .map(|body| body.password)
        .unwrap_or_default();

    state.user_service.update_password(&email, &password).await?;

    Ok(Json(MessageResponse::new(MSG_UPDATED)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "No such user", body = MessageResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(&email).await?;
    Ok(Json(MessageResponse::new(MSG_DELETED)))
}
