//! Projection of stored records into response shapes.

use chrono::SecondsFormat;
use iris_admin_core::types::{DbId, Timestamp};
use iris_admin_db::models::category_type::CategoryType;
use serde::Serialize;

/// Response shape of a type record. Timestamps are RFC 3339 strings with
/// second precision, e.g. `2024-05-01T08:30:00Z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeResponse {
    pub id: DbId,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub level: String,
    pub created_at: String,
    pub updated_at: String,
}

pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn transform(record: &CategoryType) -> TypeResponse {
    TypeResponse {
        id: record.id,
        name: record.name.clone(),
        display_name: record.display_name.clone(),
        description: record.description.clone(),
        level: record.level.clone(),
        created_at: format_timestamp(&record.created_at),
        updated_at: format_timestamp(&record.updated_at),
    }
}

/// Order and length are preserved.
pub fn transform_all(records: &[CategoryType]) -> Vec<TypeResponse> {
    records.iter().map(transform).collect()
}
