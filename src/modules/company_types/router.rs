use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_company_types;

pub fn init_company_types_router() -> Router<AppState> {
    Router::new().route("/company-types", get(get_company_types))
}
