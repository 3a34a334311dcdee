use std::time::Instant;

use fake::Fake;
use fake::faker::address::en::CityName;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};

use super::models::DistrictSeed;
use super::{BATCH_SIZE, SEED_MARKER, SEED_USER};

/// Generates `count` districts spread round-robin over `countries`, given as
/// `(id_hash, name)` pairs. Empty when there are no countries.
pub fn generate_districts(countries: &[(String, String)], count: usize) -> Vec<DistrictSeed> {
    if countries.is_empty() {
        return Vec::new();
    }

    (0..count)
        .into_par_iter()
        .map(|i| {
            let (country_id_hash, country_name) = &countries[i % countries.len()];
            DistrictSeed {
                name: CityName().fake(),
                country_id_hash: country_id_hash.clone(),
                country_name: country_name.clone(),
            }
        })
        .collect()
}

/// Seeds districts and returns how many rows were inserted.
pub async fn seed_districts(
    db: &PgPool,
    countries: &[(String, String)],
    count: usize,
) -> anyhow::Result<usize> {
    let start_time = Instant::now();
    println!("🏙️  Seeding {} districts...", count);

    let districts = generate_districts(countries, count);
    if districts.is_empty() {
        println!("   ⚠ No countries to attach districts to, skipping");
        return Ok(0);
    }

    let mut tx = db.begin().await?;
    for chunk in districts.chunks(BATCH_SIZE) {
        insert_districts_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} districts in {:?}",
        districts.len(),
        start_time.elapsed()
    );
    Ok(districts.len())
}

async fn insert_districts_chunk(
    tx: &mut Transaction<'_, Postgres>,
    districts: &[DistrictSeed],
) -> anyhow::Result<()> {
    let mut query = String::from(
        "INSERT INTO districts \
         (name, country_id_hash, country_name, inserted_user, inserted_user_id_hash) VALUES ",
    );
    for i in 0..districts.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 3;
        query.push_str(&format!(
            "(${}, ${}, ${}, '{}', '{}')",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            SEED_USER,
            SEED_MARKER
        ));
    }

    let mut q = sqlx::query(&query);
    for district in districts {
        q = q
            .bind(&district.name)
            .bind(&district.country_id_hash)
            .bind(&district.country_name);
    }

    q.execute(&mut **tx).await?;
    Ok(())
}

pub async fn clear_districts(db: &PgPool) -> anyhow::Result<u64> {
    println!("🗑️  Clearing seeded districts...");

    let result = sqlx::query("DELETE FROM districts WHERE inserted_user_id_hash = $1")
        .bind(SEED_MARKER)
        .execute(db)
        .await?
        .rows_affected();

    println!("   ✓ Deleted {} districts", result);
    Ok(result)
}
