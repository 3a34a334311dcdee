use anyhow::anyhow;
use catalog_core::{
    AppError, FilterableColumn, non_blank, parse_status_flag, require_non_blank,
};
use catalog_db::{Entity, Repository};
use catalog_models::{Claims, Country, CreateCountryDto, UpdateCountryDto};
use sqlx::PgPool;
use tracing::instrument;

pub struct CountryService;

impl CountryService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Country>, AppError> {
        Repository::<Country>::new(db).list().await
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id_hash: &str) -> Result<Country, AppError> {
        Repository::<Country>::new(db).get_by_id(id_hash).await
    }

    /// Inserts a country, recording `actor` in the audit columns.
    #[instrument(skip(db, actor), fields(actor = %actor.username))]
    pub async fn create(
        db: &PgPool,
        dto: CreateCountryDto,
        actor: &Claims,
    ) -> Result<Country, AppError> {
        let name = require_non_blank(&dto.name, "name")?;
        let code = require_non_blank(&dto.code, "code")?;

        let sql = format!(
            "INSERT INTO countries (name, code, inserted_user, inserted_user_id_hash) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            Country::COLUMNS
        );
        let country = sqlx::query_as::<_, Country>(&sql)
            .bind(name)
            .bind(code)
            .bind(&actor.username)
            .bind(&actor.id_hash)
            .fetch_one(db)
            .await?;

        Ok(country)
    }

    /// Partial update. Blank fields are treated as absent; at least one field
    /// must remain.
    #[instrument(skip(db))]
    pub async fn update(
        db: &PgPool,
        id_hash: &str,
        dto: UpdateCountryDto,
    ) -> Result<Country, AppError> {
        let name = non_blank(dto.name);
        let code = non_blank(dto.code);
        if name.is_none() && code.is_none() {
            return Err(AppError::validation(anyhow!("name or code is required")));
        }

        let existing = Repository::<Country>::new(db).get_by_id(id_hash).await?;

        let sql = format!(
            "UPDATE countries SET name = $2, code = $3, updated_at = NOW() \
             WHERE id_hash = $1 RETURNING {}",
            Country::COLUMNS
        );
        let country = sqlx::query_as::<_, Country>(&sql)
            .bind(&existing.id_hash)
            .bind(name.unwrap_or(existing.name))
            .bind(code.unwrap_or(existing.code))
            .fetch_one(db)
            .await?;

        Ok(country)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id_hash: &str) -> Result<(), AppError> {
        Repository::<Country>::new(db).delete(id_hash).await
    }

    /// Stores the path literal as the soft-delete flag: `true` marks the
    /// country deleted, `false` restores it.
    #[instrument(skip(db))]
    pub async fn set_status(db: &PgPool, id_hash: &str, is_active: &str) -> Result<(), AppError> {
        let deleted = parse_status_flag(is_active)?;
        Repository::<Country>::new(db)
            .set_deleted(id_hash, deleted)
            .await
    }

    #[instrument(skip(db))]
    pub async fn filterable_columns(db: &PgPool) -> Result<Vec<FilterableColumn>, AppError> {
        Repository::<Country>::new(db).filterable_columns().await
    }
}
