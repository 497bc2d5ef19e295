//! Request extractors whose rejections render as envelopes.

use std::convert::Infallible;

use axum::extract::{FromRequest, FromRequestParts, Path, Query};
use axum::http::request::Parts;
use axum::Json;
use iris_admin_core::types::DbId;

use crate::error::AppError;

/// JSON body extractor. A malformed body becomes a `400` envelope carrying
/// the decoder's message.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor with envelope rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// The `{id}` path segment. Anything that is not a non-negative integer
/// reads as `0`, which no stored record has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|Path(raw)| parse_id(&raw))
            .unwrap_or(0);
        Ok(PathId(id))
    }
}

fn parse_id(raw: &str) -> DbId {
    raw.trim()
        .parse::<DbId>()
        .ok()
        .filter(|id| *id >= 0)
        .unwrap_or(0)
}
