//! Administrator bootstrap.

use anyhow::{Context, bail};
use catalog_core::{hash_password, is_blank};
use catalog_models::roles;
use sqlx::PgPool;

/// Creates `username` as an active administrator, or promotes and
/// re-activates an existing account with that name and resets its password.
///
/// Returns the account's `id_hash`.
pub async fn upsert_admin(db: &PgPool, username: &str, password: &str) -> anyhow::Result<String> {
    if is_blank(username) {
        bail!("username is required");
    }
    if is_blank(password) {
        bail!("password is required");
    }

    let hashed_password = hash_password(password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.message()))?;

    let id_hash = sqlx::query_scalar::<_, String>(
        "INSERT INTO users (username, password, role, is_active)
         VALUES ($1, $2, $3, TRUE)
         ON CONFLICT (username) DO UPDATE
         SET password = EXCLUDED.password,
             role = EXCLUDED.role,
             is_active = TRUE,
             updated_at = NOW()
         RETURNING id_hash",
    )
    .bind(username.trim())
    .bind(&hashed_password)
    .bind(roles::ADMIN)
    .fetch_one(db)
    .await
    .context("Failed to write administrator account")?;

    Ok(id_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::verify_password;

    async fn stored(db: &PgPool, username: &str) -> (String, String, bool) {
        sqlx::query_as::<_, (String, String, bool)>(
            "SELECT password, role, is_active FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_one(db)
        .await
        .unwrap()
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_creates_active_admin(pool: PgPool) {
        upsert_admin(&pool, "admin", "admin123").await.unwrap();

        let (password, role, is_active) = stored(&pool, "admin").await;
        assert_eq!(role, "ADMIN");
        assert!(is_active);
        assert!(verify_password("admin123", &password).unwrap());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_promotes_existing_user(pool: PgPool) {
        sqlx::query("INSERT INTO users (username, password) VALUES ('operator', 'x')")
            .execute(&pool)
            .await
            .unwrap();

        let first = upsert_admin(&pool, "operator", "newpass").await.unwrap();
        let second = upsert_admin(&pool, "operator", "newpass").await.unwrap();

        assert_eq!(first, second);
        let (password, role, is_active) = stored(&pool, "operator").await;
        assert_eq!(role, "ADMIN");
        assert!(is_active);
        assert!(verify_password("newpass", &password).unwrap());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_blank_input_rejected(pool: PgPool) {
        assert!(upsert_admin(&pool, " ", "pass").await.is_err());
        assert!(upsert_admin(&pool, "admin", "").await.is_err());
    }
}
