//! Districts. Each belongs to a country whose name is copied onto the row.

use catalog_core::Filterable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::timestamps::filter_value;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct District {
    pub id_hash: String,
    #[schema(example = "Baku")]
    pub name: String,
    /// Copy of the owning country's name, refreshed whenever
    /// `country_id_hash` is written.
    pub country_name: String,
    pub country_id_hash: String,
    pub is_deleted: bool,
    pub inserted_user: Option<String>,
    pub inserted_user_id_hash: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Filterable for District {
    const FILTERABLE_COLUMNS: &'static [&'static str] = &[
        "id_hash",
        "name",
        "country_name",
        "country_id_hash",
        "inserted_user",
        "inserted_user_id_hash",
        "is_deleted",
        "createdAt",
        "updatedAt",
    ];

    fn column_value(&self, column: &str) -> Option<Value> {
        let text = |s: &String| Some(Value::String(s.clone()));
        match column {
            "id_hash" => text(&self.id_hash),
            "name" => text(&self.name),
            "country_name" => text(&self.country_name),
            "country_id_hash" => text(&self.country_id_hash),
            "inserted_user" => self.inserted_user.as_ref().and_then(text),
            "inserted_user_id_hash" => self.inserted_user_id_hash.as_ref().and_then(text),
            "is_deleted" => Some(Value::Bool(self.is_deleted)),
            "createdAt" => Some(filter_value(&self.created_at)),
            "updatedAt" => Some(filter_value(&self.updated_at)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDistrictDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Baku")]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "country_id_hash is required"))]
    pub country_id_hash: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateDistrictDto {
    pub name: Option<String>,
    pub country_id_hash: Option<String>,
}
