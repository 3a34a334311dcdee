mod common;

use axum::http::StatusCode;
use catalog_config::JwtConfig;
use common::{
    TEST_PASSWORD, admin_token, create_test_user, get_auth_token, send, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;

async fn user_is_active(pool: &PgPool, username: &str) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT is_active FROM users WHERE username = $1")
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_creates_inactive_user(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": "newuser", "password": "secret" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], 201);
    assert!(body["message"].as_str().unwrap().contains("administrator"));
    assert!(!user_is_active(&pool, "newuser").await);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_username(pool: PgPool) {
    create_test_user(&pool, "taken", "USER", false).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": "taken", "password": "secret" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists");
    assert_eq!(body["status"], 400);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_missing_password(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": "newuser" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "password is required");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_returns_bearer_token(pool: PgPool) {
    create_test_user(&pool, "active", "USER", true).await;

    let app = setup_test_app(pool);
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "active", "password": TEST_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expiry_time"], JwtConfig::from_env().access_token_expiry);
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_test_user(&pool, "active", "USER", true).await;

    let app = setup_test_app(pool);
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "active", "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_unknown_user_matches_wrong_password(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "ghost", "password": "whatever" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_inactive_account(pool: PgPool) {
    create_test_user(&pool, "pending", "USER", false).await;

    let app = setup_test_app(pool);
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "pending", "password": TEST_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "This user account is not active");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_activates_registered_user(pool: PgPool) {
    let token = admin_token(&pool).await;
    let user_id = create_test_user(&pool, "pending", "USER", false).await;

    let (status, body) = send(
        setup_test_app(pool.clone()),
        "PATCH",
        &format!("/api/auth/UpdateStatus/{}/true", user_id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Changed user status");
    assert!(user_is_active(&pool, "pending").await);

    // The activated account can now log in.
    get_auth_token(&pool, "pending").await;
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_status_rejects_bad_literal(pool: PgPool) {
    let token = admin_token(&pool).await;
    let user_id = create_test_user(&pool, "pending", "USER", false).await;

    let (status, _) = send(
        setup_test_app(pool.clone()),
        "PATCH",
        &format!("/api/auth/UpdateStatus/{}/yes", user_id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!user_is_active(&pool, "pending").await);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_status_requires_token(pool: PgPool) {
    let user_id = create_test_user(&pool, "pending", "USER", false).await;

    let (status, body) = send(
        setup_test_app(pool),
        "PATCH",
        &format!("/api/auth/UpdateStatus/{}/true", user_id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized: No token provided");
    assert_eq!(body["status"], 401);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_users_listing_hides_passwords(pool: PgPool) {
    let token = admin_token(&pool).await;

    let (status, body) = send(setup_test_app(pool), "GET", "/api/users", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "admin");
    assert!(users[0].get("password").is_none());
}
