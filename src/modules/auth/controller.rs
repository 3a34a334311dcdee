use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use catalog_core::{AppError, ErrorBody};
use catalog_models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use tracing::instrument;

use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::AuthService;

/// Register a new account. It stays inactive until an administrator enables it.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing field or username taken", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(username = %dto.username))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    AuthService::register(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "New user is created, you can log in after an administrator activates your account",
            201,
        )),
    ))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing field, invalid credentials or inactive account", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(username = %dto.username))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.db, &state.jwt_config, dto).await?;
    Ok(Json(response))
}

/// Activate or deactivate an account.
#[utoipa::path(
    patch,
    path = "/api/auth/UpdateStatus/{id_hash}/{status}",
    params(
        ("id_hash" = String, Path, description = "User id_hash"),
        ("status" = String, Path, description = "`true` to activate, `false` to deactivate")
    ),
    responses(
        (status = 200, description = "Status changed", body = MessageResponse),
        (status = 400, description = "Invalid status literal or unknown user", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(actor = %auth_user.username()))]
pub async fn update_user_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((id_hash, status)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::set_active(&state.db, &id_hash, &status).await?;
    Ok(Json(MessageResponse::new("Changed user status", 200)))
}
