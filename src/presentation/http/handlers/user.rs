//! User Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::UpdateUserRequest;
use crate::application::dto::response::UserResponse;
use crate::application::services::{
    UpdateProfileDto, UserError, UserService, UserServiceImpl,
};
use crate::infrastructure::repositories::PgUserRepository;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn user_service(state: &AppState) -> UserServiceImpl<PgUserRepository> {
    UserServiceImpl::new(Arc::new(PgUserRepository::new(state.db.clone())))
}

fn map_user_error(e: UserError) -> AppError {
    match e {
        UserError::NotFound => AppError::NotFound("User not found".into()),
        UserError::UsernameTaken => AppError::Conflict("Username already taken".into()),
        UserError::EmailTaken => AppError::Conflict("Email already registered".into()),
        e => AppError::Internal(e.to_string()),
    }
}

/// Get current authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/users/@me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = user_service(&state)
        .get_user(&auth.user_id)
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from_dto(user, true)))
}

/// Update current user profile
#[utoipa::path(
    patch,
    path = "/api/v1/users/@me",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn update_current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let update = UpdateProfileDto {
        username: body.username,
        email: body.email,
    };

    let user = user_service(&state)
        .update_profile(&auth.user_id, update)
        .await
        .map_err(map_user_error)?;

    Ok(Json(UserResponse::from_dto(user, true)))
}

/// Delete current user account
#[utoipa::path(
    delete,
    path = "/api/v1/users/@me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Account deleted")
    )
)]
pub async fn delete_current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<StatusCode, AppError> {
    user_service(&state)
        .delete_user(&auth.user_id)
        .await
        .map_err(map_user_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = String, Path, description = "Prefixed user ID (USR-…)")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = user_service(&state)
        .get_user(&user_id)
        .await
        .map_err(map_user_error)?;

    // Don't include email for other users
    Ok(Json(UserResponse::from_dto(user, false)))
}
