use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{
    create_district, delete_district, get_district, get_district_filter_columns, get_districts,
    update_district, update_district_status,
};

pub fn init_districts_router() -> Router<AppState> {
    Router::new()
        .route("/district", get(get_districts).post(create_district))
        .route(
            "/district/{id_hash}",
            get(get_district).put(update_district).delete(delete_district),
        )
        .route(
            "/district/update-status/{id_hash}/{isActive}",
            patch(update_district_status),
        )
        .route(
            "/districts/get-filterable-columns-data",
            get(get_district_filter_columns),
        )
        // Misspelled path kept for clients built against it.
        .route(
            "/districties/get-filterable-columns-data",
            get(get_district_filter_columns),
        )
}
