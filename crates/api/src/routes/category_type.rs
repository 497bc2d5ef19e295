//! Route definitions for type records.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::category_type;
use crate::state::AppState;

/// Type routes, mounted at the root.
///
/// ```text
/// POST   /admin/types/              -> create_type
/// GET    /admin/types/{id}          -> get_type
/// POST   /admin/types/{id}/update   -> update_type
/// DELETE /admin/types/{id}/delete   -> delete_type
/// GET    /tts                       -> list_types
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/types", post(category_type::create_type))
        .route("/admin/types/", post(category_type::create_type))
        .route("/admin/types/{id}", get(category_type::get_type))
        .route("/admin/types/{id}/update", post(category_type::update_type))
        .route("/admin/types/{id}/delete", delete(category_type::delete_type))
        .route("/tts", get(category_type::list_types))
}
