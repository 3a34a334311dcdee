//! No-op metrics surface used when the `observability` feature is off.

use axum::{Router, extract::Request, middleware::Next, response::Response};

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    next.run(req).await
}

pub fn init_metrics() -> Option<Router> {
    None
}

pub fn track_user_registered() {}
pub fn track_login_success(_role: &str) {}
pub fn track_login_failure(_reason: &'static str) {}
pub fn track_jwt_issued() {}
pub fn track_entity_created(_entity: &'static str) {}
