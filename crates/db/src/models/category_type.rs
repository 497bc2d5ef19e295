//! Type (category/classification) entity model and DTOs.

use iris_admin_core::error::CoreError;
use iris_admin_core::listing::{self, SortDirection, SortOrder};
use iris_admin_core::types::{DbId, Timestamp};
use iris_admin_core::validation::DeclaredFields;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryType {
    pub id: DbId,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub level: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Write DTO used by both create and update (full replacement of the
/// mutable fields). Missing or `null` JSON fields decode as empty strings
/// and are then caught by validation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateCategoryType {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(max = 191))]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(max = 191))]
    pub description: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(max = 191))]
    pub level: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DeclaredFields for CreateCategoryType {
    const FIELDS: &'static [&'static str] = &["name", "display_name", "description", "level"];
}

/// Columns a list request may sort by.
pub const ORDERABLE_COLUMNS: &[&str] = &[
    "id",
    "name",
    "display_name",
    "level",
    "created_at",
    "updated_at",
];

/// Sort applied when the request names none.
pub const DEFAULT_ORDER: SortOrder = SortOrder::new("created_at", SortDirection::Desc);

/// Normalized parameters for a paginated, filtered list of types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeListQuery {
    /// Case-insensitive substring matched against `name`.
    pub search: Option<String>,
    pub order: SortOrder,
    pub limit: i64,
    pub skip: i64,
}

impl TypeListQuery {
    /// Build a query from raw request values. `page` is 1-based.
    pub fn from_params(
        search: Option<&str>,
        order_by: Option<&str>,
        page: i64,
        limit: i64,
    ) -> Result<Self, CoreError> {
        let order = match order_by {
            Some(expr) => SortOrder::parse(expr, ORDERABLE_COLUMNS)?,
            None => None,
        }
        .unwrap_or(DEFAULT_ORDER);

        let limit = listing::clamp_limit(limit, listing::MAX_PAGE_SIZE);

        Ok(Self {
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            order,
            limit,
            skip: listing::rows_to_skip(page, limit),
        })
    }
}

impl Default for TypeListQuery {
    fn default() -> Self {
        Self {
            search: None,
            order: DEFAULT_ORDER,
            limit: listing::DEFAULT_PAGE_SIZE,
            skip: 0,
        }
    }
}
