use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Filter values for timestamps use the same RFC 3339 form clients see in
/// entity payloads.
pub(crate) fn filter_value(ts: &DateTime<Utc>) -> Value {
    Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
