//! The data-access port used by the HTTP handlers.
//!
//! Handlers talk to a `dyn TypeStore` so the storage backend can be swapped
//! (PostgreSQL in production, in-memory doubles in tests). [`PgTypeStore`]
//! adapts [`CategoryTypeRepo`] and folds "no row" results into
//! [`StoreError::NotFound`].

use async_trait::async_trait;
use iris_admin_core::types::DbId;

use crate::models::category_type::{CategoryType, CreateCategoryType, TypeListQuery};
use crate::repositories::CategoryTypeRepo;
use crate::DbPool;

/// Re-exported so callers can build or match on wrapped database errors
/// without depending on sqlx directly.
pub use sqlx::Error as SqlxError;

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("duplicate value violates unique constraint {0}")]
    Duplicate(String),

    /// Details stay in the source chain (and the logs), not in the message.
    #[error("database error")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(ref db_err)
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                StoreError::Duplicate(db_err.constraint().unwrap_or("unknown").to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

/// Persistence capability for type records.
#[async_trait]
pub trait TypeStore: Send + Sync {
    async fn get_by_id(&self, id: DbId) -> Result<CategoryType, StoreError>;

    /// Insert a record; the store assigns the id.
    async fn create(&self, input: &CreateCategoryType) -> Result<CategoryType, StoreError>;

    /// Replace the mutable fields of record `id`.
    async fn update_by_id(
        &self,
        id: DbId,
        input: &CreateCategoryType,
    ) -> Result<CategoryType, StoreError>;

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError>;

    async fn list(&self, query: &TypeListQuery) -> Result<Vec<CategoryType>, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// [`TypeStore`] backed by the `types` table.
#[derive(Debug, Clone)]
pub struct PgTypeStore {
    pool: DbPool,
}

impl PgTypeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TypeStore for PgTypeStore {
    async fn get_by_id(&self, id: DbId) -> Result<CategoryType, StoreError> {
        CategoryTypeRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, input: &CreateCategoryType) -> Result<CategoryType, StoreError> {
        Ok(CategoryTypeRepo::create(&self.pool, input).await?)
    }

    async fn update_by_id(
        &self,
        id: DbId,
        input: &CreateCategoryType,
    ) -> Result<CategoryType, StoreError> {
        CategoryTypeRepo::update(&self.pool, id, input)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        if CategoryTypeRepo::delete(&self.pool, id).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    async fn list(&self, query: &TypeListQuery) -> Result<Vec<CategoryType>, StoreError> {
        tracing::debug!(
            search = query.search.as_deref(),
            order = %query.order,
            limit = query.limit,
            skip = query.skip,
            "Listing types"
        );
        Ok(CategoryTypeRepo::list(&self.pool, query).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
