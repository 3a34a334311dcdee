//! Distinct-value aggregation backing the `get-filterable-columns-data`
//! endpoints.
//!
//! Clients build filter dropdowns from the result, so values keep the order
//! in which they were first seen in the row set and duplicates collapse.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One column and the distinct values observed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterableColumn {
    pub field: String,
    #[schema(value_type = Vec<Object>)]
    pub values: Vec<Value>,
}

/// A row type that exposes some of its columns for filtering.
pub trait Filterable {
    /// Column names in the order they are reported.
    const FILTERABLE_COLUMNS: &'static [&'static str];

    /// Value of `column` for this row, or `None` when the column is null or
    /// not one of [`Self::FILTERABLE_COLUMNS`].
    fn column_value(&self, column: &str) -> Option<Value>;
}

/// Single pass over `rows`, collecting the distinct non-null, non-empty
/// values of every filterable column.
pub fn collect_filterable_columns<T: Filterable>(rows: &[T]) -> Vec<FilterableColumn> {
    let mut columns: Vec<(FilterableColumn, HashSet<String>)> = T::FILTERABLE_COLUMNS
        .iter()
        .map(|field| {
            (
                FilterableColumn {
                    field: (*field).to_string(),
                    values: Vec::new(),
                },
                HashSet::new(),
            )
        })
        .collect();

    for row in rows {
        for (column, seen) in columns.iter_mut() {
            let Some(value) = row.column_value(&column.field) else {
                continue;
            };
            if is_blank(&value) {
                continue;
            }
            if seen.insert(value.to_string()) {
                column.values.push(value);
            }
        }
    }

    columns.into_iter().map(|(column, _)| column).collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
