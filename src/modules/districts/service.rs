use anyhow::anyhow;
use catalog_core::{
    AppError, FilterableColumn, non_blank, parse_status_flag, require_non_blank,
};
use catalog_db::{Entity, Repository};
use catalog_models::{Claims, Country, CreateDistrictDto, District, UpdateDistrictDto};
use sqlx::PgPool;
use tracing::instrument;

pub struct DistrictService;

impl DistrictService {
    async fn resolve_country(db: &PgPool, country_id_hash: &str) -> Result<Country, AppError> {
        Repository::<Country>::new(db)
            .find_by_id(country_id_hash)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Country not found with the given id_hash")))
    }

    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<District>, AppError> {
        Repository::<District>::new(db).list().await
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id_hash: &str) -> Result<District, AppError> {
        Repository::<District>::new(db).get_by_id(id_hash).await
    }

    /// Inserts a district under an existing country, copying its name.
    #[instrument(skip(db, actor), fields(actor = %actor.username))]
    pub async fn create(
        db: &PgPool,
        dto: CreateDistrictDto,
        actor: &Claims,
    ) -> Result<District, AppError> {
        let name = require_non_blank(&dto.name, "name")?;
        let country_id_hash = require_non_blank(&dto.country_id_hash, "country_id_hash")?;

        let country = Self::resolve_country(db, country_id_hash).await?;

        let sql = format!(
            "INSERT INTO districts \
             (name, country_name, country_id_hash, inserted_user, inserted_user_id_hash) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            District::COLUMNS
        );
        let district = sqlx::query_as::<_, District>(&sql)
            .bind(name)
            .bind(&country.name)
            .bind(&country.id_hash)
            .bind(&actor.username)
            .bind(&actor.id_hash)
            .fetch_one(db)
            .await?;

        Ok(district)
    }

    /// Partial update. Supplying `country_id_hash` always refreshes
    /// `country_name` from the referenced country.
    #[instrument(skip(db))]
    pub async fn update(
        db: &PgPool,
        id_hash: &str,
        dto: UpdateDistrictDto,
    ) -> Result<District, AppError> {
        let name = non_blank(dto.name);
        let country_id_hash = non_blank(dto.country_id_hash);
        if name.is_none() && country_id_hash.is_none() {
            return Err(AppError::validation(anyhow!(
                "name or country_id_hash is required"
            )));
        }

        let existing = Repository::<District>::new(db).get_by_id(id_hash).await?;

        let (country_id_hash, country_name) = match country_id_hash {
            Some(country_id_hash) => {
                let country = Self::resolve_country(db, &country_id_hash).await?;
                (country.id_hash, country.name)
            }
            None => (existing.country_id_hash, existing.country_name),
        };

        let sql = format!(
            "UPDATE districts SET name = $2, country_id_hash = $3, country_name = $4, \
             updated_at = NOW() WHERE id_hash = $1 RETURNING {}",
            District::COLUMNS
        );
        let district = sqlx::query_as::<_, District>(&sql)
            .bind(&existing.id_hash)
            .bind(name.unwrap_or(existing.name))
            .bind(country_id_hash)
            .bind(country_name)
            .fetch_one(db)
            .await?;

        Ok(district)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id_hash: &str) -> Result<(), AppError> {
        Repository::<District>::new(db).delete(id_hash).await
    }

    /// `true` soft-deletes, `false` restores.
    #[instrument(skip(db))]
    pub async fn set_status(db: &PgPool, id_hash: &str, is_active: &str) -> Result<(), AppError> {
        let deleted = parse_status_flag(is_active)?;
        Repository::<District>::new(db)
            .set_deleted(id_hash, deleted)
            .await
    }

    #[instrument(skip(db))]
    pub async fn filterable_columns(db: &PgPool) -> Result<Vec<FilterableColumn>, AppError> {
        Repository::<District>::new(db).filterable_columns().await
    }
}
