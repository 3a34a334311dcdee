use axum::{
    Json,
    extract::{Path, State},
};
use catalog_core::{AppError, ErrorBody};
use catalog_models::{Module, ModulePage};
use tracing::instrument;

use crate::middleware::AuthUser;
use crate::state::AppState;

use super::service::NavigationService;

#[utoipa::path(
    get,
    path = "/api/Module/GetUserModules",
    responses(
        (status = 200, description = "Navigation modules in display order", body = Vec<Module>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(user = %auth_user.username()))]
pub async fn get_user_modules(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Module>>, AppError> {
    let modules = NavigationService::modules(&state.db).await?;
    Ok(Json(modules))
}

#[utoipa::path(
    get,
    path = "/api/ModulePage/GetForUserByModuleId/{moduleIdHash}",
    params(("moduleIdHash" = String, Path, description = "Module id_hash")),
    responses(
        (status = 200, description = "Pages of the module in display order", body = Vec<ModulePage>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_module_pages(
    State(state): State<AppState>,
    Path(module_id_hash): Path<String>,
) -> Result<Json<Vec<ModulePage>>, AppError> {
    let pages = NavigationService::pages(&state.db, &module_id_hash).await?;
    Ok(Json(pages))
}
