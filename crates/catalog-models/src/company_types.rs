use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompanyType {
    pub value_hash: String,
    pub display_text: String,
    #[schema(example = "lab")]
    pub key: String,
}
