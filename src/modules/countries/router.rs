use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{
    create_country, delete_country, get_countries, get_country, get_country_filter_columns,
    update_country, update_country_status,
};

pub fn init_countries_router() -> Router<AppState> {
    Router::new()
        .route("/country", get(get_countries).post(create_country))
        .route(
            "/country/{id_hash}",
            get(get_country).put(update_country).delete(delete_country),
        )
        .route(
            "/country/update-status/{id_hash}/{isActive}",
            patch(update_country_status),
        )
        .route(
            "/countries/get-filterable-columns-data",
            get(get_country_filter_columns),
        )
}
