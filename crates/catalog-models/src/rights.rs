use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Access level that can be granted on a resource.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Right {
    pub value_hash: String,
    pub display_text: String,
    #[schema(example = "view")]
    pub key: String,
}
