use axum::{Json, extract::State};
use catalog_core::{AppError, ErrorBody};
use catalog_db::Repository;
use catalog_models::Right;
use tracing::instrument;

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/rights",
    responses(
        (status = 200, description = "Grantable access levels", body = Vec<Right>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Reference data",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_rights(State(state): State<AppState>) -> Result<Json<Vec<Right>>, AppError> {
    let rights = Repository::<Right>::new(&state.db).list().await?;
    Ok(Json(rights))
}
