//! Navigation modules and the pages inside them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Module {
    pub id_hash: String,
    #[schema(example = "modules.adminTitle")]
    pub name: String,
    #[schema(example = "admin-panel")]
    pub key: String,
    pub icon: String,
    pub display_order: i32,
    pub description: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ModulePage {
    pub id_hash: String,
    #[serde(rename = "moduleId")]
    pub module_id: String,
    pub name: String,
    pub key: String,
    pub icon: String,
    pub display_order: i32,
    pub route: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
