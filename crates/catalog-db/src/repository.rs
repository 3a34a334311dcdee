//! One repository implementation, instantiated per table.
//!
//! Table and column names come from `'static` constants on [`Entity`]
//! implementations, never from request input, so interpolating them into
//! SQL is safe. Values are always bound.

use std::marker::PhantomData;

use anyhow::anyhow;
use catalog_core::{AppError, Filterable, FilterableColumn, collect_filterable_columns, is_blank};
use sqlx::{FromRow, PgPool, postgres::PgRow};
use tracing::instrument;

/// Row type stored in a single table with an opaque string key.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
    /// Human-readable name used in error messages.
    const NAME: &'static str;
    const ID_COLUMN: &'static str = "id_hash";
    /// Comma-separated select list matching the struct's fields.
    const COLUMNS: &'static str;
    /// Stable ordering for listings. Defaults to insertion order.
    const ORDER_BY: &'static str = "created_at, id_hash";
}

/// Marker for tables carrying an `is_deleted` flag and `updated_at`.
pub trait SoftDelete: Entity {}

pub struct Repository<'a, E> {
    db: &'a PgPool,
    _entity: PhantomData<E>,
}

impl<'a, E: Entity> Repository<'a, E> {
    pub fn new(db: &'a PgPool) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    fn select(&self) -> String {
        format!("SELECT {} FROM {}", E::COLUMNS, E::TABLE)
    }

    fn not_found(&self) -> AppError {
        AppError::not_found(anyhow!("{} not found with the given {}", E::NAME, E::ID_COLUMN))
    }

    fn require_id<'i>(&self, id: &'i str) -> Result<&'i str, AppError> {
        if is_blank(id) {
            return Err(AppError::validation(anyhow!("{} is required", E::ID_COLUMN)));
        }
        Ok(id)
    }

    /// Every row, unpaginated.
    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn list(&self) -> Result<Vec<E>, AppError> {
        let sql = format!("{} ORDER BY {}", self.select(), E::ORDER_BY);
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(self.db).await?;
        Ok(rows)
    }

    /// Rows whose `column` equals `value`. `column` must be a trusted name.
    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn list_by(&self, column: &'static str, value: &str) -> Result<Vec<E>, AppError> {
        let sql = format!(
            "{} WHERE {} = $1 ORDER BY {}",
            self.select(),
            column,
            E::ORDER_BY
        );
        let rows = sqlx::query_as::<_, E>(&sql)
            .bind(value)
            .fetch_all(self.db)
            .await?;
        Ok(rows)
    }

    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn find_by_id(&self, id: &str) -> Result<Option<E>, AppError> {
        let sql = format!("{} WHERE {} = $1", self.select(), E::ID_COLUMN);
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(self.db)
            .await?;
        Ok(row)
    }

    /// Like [`Self::find_by_id`] but a blank id is a validation error and a
    /// miss is a not-found error.
    pub async fn get_by_id(&self, id: &str) -> Result<E, AppError> {
        let id = self.require_id(id)?;
        self.find_by_id(id).await?.ok_or_else(|| self.not_found())
    }

    /// Hard delete. A row still referenced through a foreign key is reported
    /// as a conflict and left in place.
    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = self.require_id(id)?;
        let sql = format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::conflict(anyhow!(
                            "{} is still referenced by other records and cannot be deleted",
                            E::NAME
                        ));
                    }
                }
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(self.not_found());
        }

        Ok(())
    }
}

impl<E: SoftDelete> Repository<'_, E> {
    /// Sets the soft-delete flag. Writing the current value again succeeds.
    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn set_deleted(&self, id: &str, deleted: bool) -> Result<(), AppError> {
        let id = self.require_id(id)?;
        let sql = format!(
            "UPDATE {} SET is_deleted = $2, updated_at = NOW() WHERE {} = $1",
            E::TABLE,
            E::ID_COLUMN
        );

        let result = sqlx::query(&sql)
            .bind(id)
            .bind(deleted)
            .execute(self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(self.not_found());
        }

        Ok(())
    }
}

impl<E: Entity + Filterable> Repository<'_, E> {
    /// Distinct values per filterable column across the whole table.
    pub async fn filterable_columns(&self) -> Result<Vec<FilterableColumn>, AppError> {
        let rows = self.list().await?;
        Ok(collect_filterable_columns(&rows))
    }
}
