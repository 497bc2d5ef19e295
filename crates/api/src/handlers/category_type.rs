//! Handlers for type (category) records.
//!
//! Every handler returns exactly one envelope: failures short-circuit
//! through [`AppError`] before any success body is built.

use axum::extract::State;
use axum::http::StatusCode;
use iris_admin_db::models::category_type::CreateCategoryType;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery, PathId};
use crate::query::ListTypesParams;
use crate::response::{ApiResource, MSG_DELETED};
use crate::state::AppState;
use crate::transform::{transform, transform_all, TypeResponse};

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/types/{id}
pub async fn get_type(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<ApiResource<TypeResponse>> {
    let record = state.store.get_by_id(id).await?;
    Ok(ApiResource::success(transform(&record)))
}

/// POST /admin/types/
///
/// Decode, validate, insert. A row that comes back without an id is
/// reported as a failed operation.
pub async fn create_type(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategoryType>,
) -> AppResult<ApiResource<TypeResponse>> {
    state.validator.check(&input)?;

    let created = state
        .store
        .create(&input)
        .await
        .map_err(AppError::write("create prem"))?;

    if created.id == 0 {
        return Err(AppError::OperationFailed);
    }

    tracing::info!(type_id = created.id, name = %created.name, "Type created");

    Ok(ApiResource::success(transform(&created)))
}

/// POST /admin/types/{id}/update
///
/// Full replacement of the mutable fields. The id always comes from the
/// path; any `id` in the body is ignored.
pub async fn update_type(
    State(state): State<AppState>,
    PathId(id): PathId,
    AppJson(input): AppJson<CreateCategoryType>,
) -> AppResult<ApiResource<TypeResponse>> {
    state.validator.check(&input)?;

    if id == 0 {
        return Err(AppError::OperationFailed);
    }

    let updated = state
        .store
        .update_by_id(id, &input)
        .await
        .map_err(AppError::write("update type"))?;

    if updated.id == 0 {
        return Err(AppError::OperationFailed);
    }

    tracing::info!(type_id = updated.id, "Type updated");

    Ok(ApiResource::success(transform(&updated)))
}

/// DELETE /admin/types/{id}/delete
pub async fn delete_type(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<ApiResource<()>> {
    state.store.delete_by_id(id).await?;

    tracing::info!(type_id = id, "Type deleted");

    Ok(ApiResource::message(StatusCode::OK, MSG_DELETED))
}

/// GET /tts?offset=1&limit=20&searchStr=&orderBy=
///
/// One page of types, newest first unless `orderBy` says otherwise.
pub async fn list_types(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListTypesParams>,
) -> AppResult<ApiResource<Vec<TypeResponse>>> {
    let query = params.to_list_query()?;
    let records = state.store.list(&query).await?;
    Ok(ApiResource::success(transform_all(&records)))
}
