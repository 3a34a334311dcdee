use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use catalog_core::{AppError, ErrorBody, FilterableColumn};
use catalog_models::{
    Country, CreateCountryDto, DataResponse, MessageResponse, UpdateCountryDto,
};
use catalog_observability::track_entity_created;
use tracing::instrument;

use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::CountryService;

#[utoipa::path(
    get,
    path = "/api/country",
    responses(
        (status = 200, description = "All countries in insertion order", body = Vec<Country>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Countries",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_countries(State(state): State<AppState>) -> Result<Json<Vec<Country>>, AppError> {
    let countries = CountryService::list(&state.db).await?;
    Ok(Json(countries))
}

#[utoipa::path(
    get,
    path = "/api/country/{id_hash}",
    params(("id_hash" = String, Path, description = "Country id_hash")),
    responses(
        (status = 200, description = "Country found", body = Country),
        (status = 400, description = "Country not found", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Countries",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_country(
    State(state): State<AppState>,
    Path(id_hash): Path<String>,
) -> Result<Json<Country>, AppError> {
    let country = CountryService::get(&state.db, &id_hash).await?;
    Ok(Json(country))
}

#[utoipa::path(
    post,
    path = "/api/country",
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Country created", body = DataResponse<Country>),
        (status = 400, description = "Missing name or code", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Countries",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_country(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCountryDto>,
) -> Result<(StatusCode, Json<DataResponse<Country>>), AppError> {
    let country = CountryService::create(&state.db, dto, &auth_user.0).await?;
    track_entity_created("country");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("New country is created", country)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/country/{id_hash}",
    params(("id_hash" = String, Path, description = "Country id_hash")),
    request_body = UpdateCountryDto,
    responses(
        (status = 204, description = "Country updated"),
        (status = 400, description = "No field supplied or country not found", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Countries",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_country(
    State(state): State<AppState>,
    Path(id_hash): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateCountryDto>,
) -> Result<StatusCode, AppError> {
    CountryService::update(&state.db, &id_hash, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/country/{id_hash}",
    params(("id_hash" = String, Path, description = "Country id_hash")),
    responses(
        (status = 200, description = "Country deleted", body = MessageResponse),
        (status = 400, description = "Country not found or still has districts", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Countries",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_country(
    State(state): State<AppState>,
    Path(id_hash): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    CountryService::delete(&state.db, &id_hash).await?;
    Ok(Json(MessageResponse::new("Country is deleted", 200)))
}

#[utoipa::path(
    patch,
    path = "/api/country/update-status/{id_hash}/{isActive}",
    params(
        ("id_hash" = String, Path, description = "Country id_hash"),
        ("isActive" = String, Path, description = "Written to `is_deleted`: `true` soft-deletes, `false` restores")
    ),
    responses(
        (status = 200, description = "Status changed", body = MessageResponse),
        (status = 400, description = "Invalid status literal or country not found", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Countries",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_country_status(
    State(state): State<AppState>,
    Path((id_hash, is_active)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    CountryService::set_status(&state.db, &id_hash, &is_active).await?;
    Ok(Json(MessageResponse::new("Country status changed", 200)))
}

#[utoipa::path(
    get,
    path = "/api/countries/get-filterable-columns-data",
    responses(
        (status = 200, description = "Distinct values per filterable column", body = Vec<FilterableColumn>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Countries",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_country_filter_columns(
    State(state): State<AppState>,
) -> Result<Json<Vec<FilterableColumn>>, AppError> {
    let columns = CountryService::filterable_columns(&state.db).await?;
    Ok(Json(columns))
}
