use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_module_pages, get_user_modules};

pub fn init_navigation_router() -> Router<AppState> {
    Router::new()
        .route("/Module/GetUserModules", get(get_user_modules))
        .route(
            "/ModulePage/GetForUserByModuleId/{moduleIdHash}",
            get(get_module_pages),
        )
}
