use crate::docs::ApiDoc;
use crate::middleware::require_auth;
use crate::modules::auth::{init_auth_router, init_user_status_router};
use crate::modules::company_types::init_company_types_router;
use crate::modules::countries::init_countries_router;
use crate::modules::districts::init_districts_router;
use crate::modules::navigation::init_navigation_router;
use crate::modules::rights::init_rights_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use catalog_core::AppError;
use catalog_observability::{logging_middleware, metrics_middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

async fn route_not_found() -> AppError {
    AppError::route_not_found()
}

pub fn init_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(init_users_router())
        .merge(init_user_status_router())
        .merge(init_countries_router())
        .merge(init_districts_router())
        .merge(init_navigation_router())
        .merge(init_rights_router())
        .merge(init_company_types_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api", init_auth_router().merge(protected))
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}
