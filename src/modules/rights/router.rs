use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_rights;

pub fn init_rights_router() -> Router<AppState> {
    Router::new().route("/rights", get(get_rights))
}
