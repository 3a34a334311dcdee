use catalog_config::{CorsConfig, DatabaseConfig, JwtConfig};
use catalog_db::{PgPool, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// State around an existing pool, with JWT and CORS settings read from
    /// the environment.
    pub fn with_pool(db: PgPool) -> Self {
        Self {
            db,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
        }
    }
}

pub async fn init_app_state(database: &DatabaseConfig) -> Result<AppState, sqlx::Error> {
    let db = init_db_pool(database).await?;
    Ok(AppState::with_pool(db))
}
