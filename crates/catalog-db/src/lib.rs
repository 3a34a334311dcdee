//! # Catalog DB
//!
//! PostgreSQL pool setup and the generic [`Repository`] shared by every
//! reference-data table.
//!
//! # Example
//!
//! ```ignore
//! use catalog_config::DatabaseConfig;
//! use catalog_db::{Repository, init_db_pool};
//! use catalog_models::Country;
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! let countries = Repository::<Country>::new(&pool).list().await?;
//! ```

pub mod entities;
pub mod repository;

use catalog_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use repository::{Entity, Repository, SoftDelete};
pub use sqlx::PgPool;

/// Opens the connection pool. Called once at startup; the returned pool is
/// cloned into application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}
