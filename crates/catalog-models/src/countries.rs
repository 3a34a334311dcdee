//! Countries.

use catalog_core::Filterable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Country {
    pub id_hash: String,
    #[schema(example = "Azerbaijan")]
    pub name: String,
    #[schema(example = "AZ")]
    pub code: String,
    pub is_deleted: bool,
    pub inserted_user: Option<String>,
    pub inserted_user_id_hash: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Filterable for Country {
    const FILTERABLE_COLUMNS: &'static [&'static str] = &["name", "code"];

    fn column_value(&self, column: &str) -> Option<Value> {
        match column {
            "name" => Some(Value::String(self.name.clone())),
            "code" => Some(Value::String(self.code.clone())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCountryDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Azerbaijan")]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "code is required"))]
    #[schema(example = "AZ")]
    pub code: String,
}

/// Partial update. Absent or blank fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCountryDto {
    pub name: Option<String>,
    pub code: Option<String>,
}
