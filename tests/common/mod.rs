#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use catalog::router::init_router;
use catalog::state::AppState;
use catalog_core::hash_password;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "testpass123";

pub fn setup_test_app(pool: PgPool) -> Router {
    dotenvy::dotenv().ok();
    init_router(AppState::with_pool(pool))
}

/// Inserts an account directly, bypassing registration.
pub async fn create_test_user(pool: &PgPool, username: &str, role: &str, is_active: bool) -> String {
    let hashed = hash_password(TEST_PASSWORD).unwrap();

    sqlx::query_scalar::<_, String>(
        "INSERT INTO users (username, password, role, is_active) VALUES ($1, $2, $3, $4) RETURNING id_hash",
    )
    .bind(username)
    .bind(hashed)
    .bind(role)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_country(pool: &PgPool, name: &str, code: &str) -> String {
    sqlx::query_scalar::<_, String>(
        "INSERT INTO countries (name, code) VALUES ($1, $2) RETURNING id_hash",
    )
    .bind(name)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Sends one request and returns the status with the parsed body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get_auth_token(pool: &PgPool, username: &str) -> String {
    let (status, body) = send(
        setup_test_app(pool.clone()),
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

/// Creates an active administrator and logs in as them.
pub async fn admin_token(pool: &PgPool) -> String {
    create_test_user(pool, "admin", "ADMIN", true).await;
    get_auth_token(pool, "admin").await
}
