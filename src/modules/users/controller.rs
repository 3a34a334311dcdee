use axum::{Json, extract::State};
use catalog_core::{AppError, ErrorBody};
use catalog_db::Repository;
use catalog_models::User;
use tracing::instrument;

use crate::state::AppState;

/// List every account. Password hashes are never included.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = Repository::<User>::new(&state.db).list().await?;
    Ok(Json(users))
}
