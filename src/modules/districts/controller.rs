use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use catalog_core::{AppError, ErrorBody, FilterableColumn};
use catalog_models::{
    CreateDistrictDto, DataResponse, District, MessageResponse, UpdateDistrictDto,
};
use catalog_observability::track_entity_created;
use tracing::instrument;

use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::DistrictService;

#[utoipa::path(
    get,
    path = "/api/district",
    responses(
        (status = 200, description = "All districts in insertion order", body = Vec<District>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Districts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_districts(
    State(state): State<AppState>,
) -> Result<Json<Vec<District>>, AppError> {
    let districts = DistrictService::list(&state.db).await?;
    Ok(Json(districts))
}

#[utoipa::path(
    get,
    path = "/api/district/{id_hash}",
    params(("id_hash" = String, Path, description = "District id_hash")),
    responses(
        (status = 200, description = "District found", body = District),
        (status = 400, description = "District not found", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Districts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_district(
    State(state): State<AppState>,
    Path(id_hash): Path<String>,
) -> Result<Json<District>, AppError> {
    let district = DistrictService::get(&state.db, &id_hash).await?;
    Ok(Json(district))
}

#[utoipa::path(
    post,
    path = "/api/district",
    request_body = CreateDistrictDto,
    responses(
        (status = 201, description = "District created", body = DataResponse<District>),
        (status = 400, description = "Missing field or unknown country", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Districts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_district(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateDistrictDto>,
) -> Result<(StatusCode, Json<DataResponse<District>>), AppError> {
    let district = DistrictService::create(&state.db, dto, &auth_user.0).await?;
    track_entity_created("district");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("New district created", district)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/district/{id_hash}",
    params(("id_hash" = String, Path, description = "District id_hash")),
    request_body = UpdateDistrictDto,
    responses(
        (status = 204, description = "District updated"),
        (status = 400, description = "No field supplied, district or country not found", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Districts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_district(
    State(state): State<AppState>,
    Path(id_hash): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateDistrictDto>,
) -> Result<StatusCode, AppError> {
    DistrictService::update(&state.db, &id_hash, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/district/{id_hash}",
    params(("id_hash" = String, Path, description = "District id_hash")),
    responses(
        (status = 200, description = "District deleted", body = MessageResponse),
        (status = 400, description = "District not found", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Districts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_district(
    State(state): State<AppState>,
    Path(id_hash): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    DistrictService::delete(&state.db, &id_hash).await?;
    Ok(Json(MessageResponse::new("District is deleted", 200)))
}

#[utoipa::path(
    patch,
    path = "/api/district/update-status/{id_hash}/{isActive}",
    params(
        ("id_hash" = String, Path, description = "District id_hash"),
        ("isActive" = String, Path, description = "Written to `is_deleted`: `true` soft-deletes, `false` restores")
    ),
    responses(
        (status = 200, description = "Status changed", body = MessageResponse),
        (status = 400, description = "Invalid status literal or district not found", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Districts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_district_status(
    State(state): State<AppState>,
    Path((id_hash, is_active)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    DistrictService::set_status(&state.db, &id_hash, &is_active).await?;
    Ok(Json(MessageResponse::new("District status changed", 200)))
}

#[utoipa::path(
    get,
    path = "/api/districts/get-filterable-columns-data",
    responses(
        (status = 200, description = "Distinct values per filterable column", body = Vec<FilterableColumn>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Districts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_district_filter_columns(
    State(state): State<AppState>,
) -> Result<Json<Vec<FilterableColumn>>, AppError> {
    let columns = DistrictService::filterable_columns(&state.db).await?;
    Ok(Json(columns))
}
