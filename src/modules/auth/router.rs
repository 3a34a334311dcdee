use axum::{
    Router,
    routing::{patch, post},
};

use crate::state::AppState;

use super::controller::{login_user, register_user, update_user_status};

/// Public routes: no token required.
pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_user))
        .route("/auth/login", post(login_user))
}

/// Account activation. Mounted behind the bearer-token layer.
pub fn init_user_status_router() -> Router<AppState> {
    Router::new().route(
        "/auth/UpdateStatus/{id_hash}/{status}",
        patch(update_user_status),
    )
}
