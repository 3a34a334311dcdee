//! Fake reference data for development databases.
//!
//! Every generated row carries [`SEED_MARKER`] in `inserted_user_id_hash`,
//! so [`clear_all`] removes seeded rows and leaves hand-entered ones alone.
//! Account ids are database-generated UUIDs and can never equal the marker,
//! whatever username an account picks.

mod countries;
mod districts;
pub mod models;

use std::time::Instant;

use sqlx::PgPool;

pub use countries::{clear_countries, generate_countries, seed_countries};
pub use districts::{clear_districts, generate_districts, seed_districts};
pub use models::{CountrySeed, DistrictSeed, SeedConfig};

/// `inserted_user_id_hash` value identifying seeded rows. Not a UUID.
pub const SEED_MARKER: &str = "seed";

/// Display name written to `inserted_user` on seeded rows.
pub const SEED_USER: &str = "seeder";

/// Rows per multi-value INSERT.
pub(crate) const BATCH_SIZE: usize = 500;

/// Seeds countries, then spreads districts across them.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> anyhow::Result<()> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} countries and {} districts...",
        config.countries, config.districts
    );

    let countries = seed_countries(db, config.countries).await?;
    let districts = seed_districts(db, &countries, config.districts).await?;

    println!(
        "\n✅ Seeded {} countries and {} districts in {:?}",
        countries.len(),
        districts,
        start_time.elapsed()
    );
    Ok(())
}

/// Deletes seeded districts first so seeded countries are no longer
/// referenced.
pub async fn clear_all(db: &PgPool) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let districts = clear_districts(db).await?;
    let countries = clear_countries(db).await?;

    println!(
        "\n✅ Removed {} districts and {} countries in {:?}",
        districts,
        countries,
        start_time.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn count(db: &PgPool, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(db)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_seed_then_clear(pool: PgPool) {
        seed_all(&pool, SeedConfig::new(3, 10)).await.unwrap();
        assert_eq!(count(&pool, "countries").await, 3);
        assert_eq!(count(&pool, "districts").await, 10);

        clear_all(&pool).await.unwrap();
        assert_eq!(count(&pool, "countries").await, 0);
        assert_eq!(count(&pool, "districts").await, 0);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_clear_keeps_hand_entered_rows(pool: PgPool) {
        seed_all(&pool, SeedConfig::new(2, 4)).await.unwrap();
        sqlx::query("INSERT INTO countries (name, code, inserted_user) VALUES ('Azerbaijan', 'AZ', 'admin')")
            .execute(&pool)
            .await
            .unwrap();

        clear_all(&pool).await.unwrap();

        assert_eq!(count(&pool, "countries").await, 1);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_clear_ignores_account_named_like_seeder(pool: PgPool) {
        let user_id = sqlx::query_scalar::<_, String>(
            "INSERT INTO users (username, password) VALUES ($1, 'x') RETURNING id_hash",
        )
        .bind(SEED_USER)
        .fetch_one(&pool)
        .await
        .unwrap();
        let country_id = sqlx::query_scalar::<_, String>(
            "INSERT INTO countries (name, code, inserted_user, inserted_user_id_hash)
             VALUES ('Georgia', 'GE', $1, $2) RETURNING id_hash",
        )
        .bind(SEED_USER)
        .bind(&user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO districts (name, country_name, country_id_hash, inserted_user, inserted_user_id_hash)
             VALUES ('Tbilisi', 'Georgia', $1, $2, $3)",
        )
        .bind(&country_id)
        .bind(SEED_USER)
        .bind(&user_id)
        .execute(&pool)
        .await
        .unwrap();

        clear_all(&pool).await.unwrap();

        assert_eq!(count(&pool, "countries").await, 1);
        assert_eq!(count(&pool, "districts").await, 1);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_districts_need_countries(pool: PgPool) {
        let inserted = seed_districts(&pool, &[], 5).await.unwrap();
        assert_eq!(inserted, 0);
    }
}
