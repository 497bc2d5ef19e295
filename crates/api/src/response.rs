//! The `{ code, data, msg }` envelope every admin endpoint responds with.
//!
//! The HTTP status line always mirrors `code`, so clients can rely on either.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Message for a successful read or write.
pub const MSG_SUCCESS: &str = "操作成功";

/// Message for a successful delete.
pub const MSG_DELETED: &str = "删除成功";

/// Message for a write that completed without producing a record id.
pub const MSG_FAILED: &str = "操作失败";

/// Standard response envelope.
///
/// `data` serializes as `null` when absent.
///
/// # Example
///
/// ```ignore
/// Ok(ApiResource::success(transform(&record)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResource<T: Serialize> {
    pub code: u16,
    pub data: Option<T>,
    pub msg: String,
}

impl<T: Serialize> ApiResource<T> {
    /// `200` envelope carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            data: Some(data),
            msg: MSG_SUCCESS.to_string(),
        }
    }
}

impl ApiResource<()> {
    /// Envelope with `data: null`, used for failures and for deletes.
    pub fn message(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            data: None,
            msg: msg.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResource<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
