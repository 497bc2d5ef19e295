use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use iris_admin_core::error::CoreError;
use iris_admin_db::store::StoreError;

use crate::response::ApiResource;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as a single [`ApiResource`] envelope with
/// `data: null`; the status line matches the envelope `code`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error (validation, bad list parameters).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body or query string could not be decoded.
    #[error("{0}")]
    Decode(String),

    /// A read or delete failed in the store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A create or update failed in the store. `action` is the message
    /// prefix clients match on, e.g. `create prem`.
    #[error("Error {action}: {source}")]
    Write {
        action: &'static str,
        #[source]
        source: StoreError,
    },

    /// A write finished without yielding a persisted record.
    #[error("操作失败")]
    OperationFailed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn write(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Write { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Write {
                source: StoreError::Database(_),
                ..
            } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Decode(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Decode(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Store(StoreError::Database(source))
            | AppError::Write {
                source: StoreError::Database(source),
                ..
            } => {
                tracing::error!(error = %source, "Database error");
            }
            other => {
                tracing::debug!(error = %other, "Request rejected");
            }
        }

        ApiResource::message(status, self.to_string()).into_response()
    }
}
