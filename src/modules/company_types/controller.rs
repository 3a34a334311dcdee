use axum::{Json, extract::State};
use catalog_core::{AppError, ErrorBody};
use catalog_db::Repository;
use catalog_models::CompanyType;
use tracing::instrument;

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/company-types",
    responses(
        (status = 200, description = "Company classifications", body = Vec<CompanyType>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Reference data",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_company_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyType>>, AppError> {
    let company_types = Repository::<CompanyType>::new(&state.db).list().await?;
    Ok(Json(company_types))
}
