use catalog_core::{AppError, require_non_blank};
use catalog_db::Repository;
use catalog_models::{Module, ModulePage};
use sqlx::PgPool;
use tracing::instrument;

pub struct NavigationService;

impl NavigationService {
    /// Every module, ordered for the sidebar. Not yet filtered by the
    /// caller's rights.
    #[instrument(skip(db))]
    pub async fn modules(db: &PgPool) -> Result<Vec<Module>, AppError> {
        Repository::<Module>::new(db).list().await
    }

    /// Pages of one module. An unknown module yields an empty list.
    #[instrument(skip(db))]
    pub async fn pages(db: &PgPool, module_id_hash: &str) -> Result<Vec<ModulePage>, AppError> {
        let module_id_hash = require_non_blank(module_id_hash, "moduleIdHash")?;
        Repository::<ModulePage>::new(db)
            .list_by("module_id", module_id_hash)
            .await
    }
}
