//! Repository for the `types` table.

use iris_admin_core::types::DbId;
use sqlx::PgPool;

use crate::models::category_type::{CategoryType, CreateCategoryType, TypeListQuery};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, display_name, description, level, created_at, updated_at";

/// Provides CRUD operations for types.
pub struct CategoryTypeRepo;

impl CategoryTypeRepo {
    /// Insert a new type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCategoryType,
    ) -> Result<CategoryType, sqlx::Error> {
        let query = format!(
            "INSERT INTO types (name, display_name, description, level) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryType>(&query)
            .bind(&input.name)
            .bind(&input.display_name)
            .bind(&input.description)
            .bind(&input.level)
            .fetch_one(pool)
            .await
    }

    /// Find a type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CategoryType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM types WHERE id = $1");
        sqlx::query_as::<_, CategoryType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every mutable field of a type and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateCategoryType,
    ) -> Result<Option<CategoryType>, sqlx::Error> {
        let query = format!(
            "UPDATE types SET \
                name = $2, \
                display_name = $3, \
                description = $4, \
                level = $5, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.display_name)
            .bind(&input.description)
            .bind(&input.level)
            .fetch_optional(pool)
            .await
    }

    /// Delete a type. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List one page of types, optionally filtered by a name substring.
    ///
    /// Ties on the requested order are broken by `id` so pages are stable.
    pub async fn list(pool: &PgPool, params: &TypeListQuery) -> Result<Vec<CategoryType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM types \
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%' ESCAPE '\\') \
             ORDER BY {order}, id \
             LIMIT $2 OFFSET $3",
            order = params.order,
        );
        sqlx::query_as::<_, CategoryType>(&query)
            .bind(params.search.as_deref().map(escape_like))
            .bind(params.limit)
            .bind(params.skip)
            .fetch_all(pool)
            .await
    }
}

/// Escape `LIKE` metacharacters so a search string matches literally.
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
