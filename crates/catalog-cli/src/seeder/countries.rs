use std::time::Instant;

use fake::Fake;
use fake::faker::address::en::{CountryCode, CountryName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};

use super::models::CountrySeed;
use super::{BATCH_SIZE, SEED_MARKER, SEED_USER};

/// Generates country data in parallel using Rayon
pub fn generate_countries(count: usize) -> Vec<CountrySeed> {
    (0..count)
        .into_par_iter()
        .map(|_| CountrySeed {
            name: CountryName().fake(),
            code: CountryCode().fake(),
        })
        .collect()
}

/// Seeds countries and returns `(id_hash, name)` for each inserted row.
pub async fn seed_countries(db: &PgPool, count: usize) -> anyhow::Result<Vec<(String, String)>> {
    let start_time = Instant::now();
    println!("🌍 Seeding {} countries...", count);

    let countries = generate_countries(count);

    let mut tx = db.begin().await?;
    let mut inserted = Vec::with_capacity(countries.len());
    for chunk in countries.chunks(BATCH_SIZE) {
        inserted.extend(insert_countries_chunk(&mut tx, chunk).await?);
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} countries in {:?}",
        inserted.len(),
        start_time.elapsed()
    );
    Ok(inserted)
}

async fn insert_countries_chunk(
    tx: &mut Transaction<'_, Postgres>,
    countries: &[CountrySeed],
) -> anyhow::Result<Vec<(String, String)>> {
    if countries.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO countries (name, code, inserted_user, inserted_user_id_hash) VALUES ");
    for i in 0..countries.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 2;
        query.push_str(&format!(
            "(${}, ${}, '{}', '{}')",
            param_idx + 1,
            param_idx + 2,
            SEED_USER,
            SEED_MARKER
        ));
    }
    query.push_str(" RETURNING id_hash, name");

    let mut q = sqlx::query_as::<_, (String, String)>(&query);
    for country in countries {
        q = q.bind(&country.name).bind(&country.code);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}

/// Removes seeded countries no district still references.
pub async fn clear_countries(db: &PgPool) -> anyhow::Result<u64> {
    println!("🗑️  Clearing seeded countries...");

    let result = sqlx::query(
        "DELETE FROM countries c
         WHERE c.inserted_user_id_hash = $1
           AND NOT EXISTS (SELECT 1 FROM districts d WHERE d.country_id_hash = c.id_hash)",
    )
    .bind(SEED_MARKER)
    .execute(db)
    .await?
    .rows_affected();

    println!("   ✓ Deleted {} countries", result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_countries() {
        let countries = generate_countries(20);

        assert_eq!(countries.len(), 20);
        assert!(countries.iter().all(|c| !c.name.is_empty()));
        assert!(countries.iter().all(|c| !c.code.is_empty()));
    }
}
