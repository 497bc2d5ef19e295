use std::sync::Arc;

use iris_admin_core::validation::FieldValidator;
use iris_admin_db::store::TypeStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence for type records.
    pub store: Arc<dyn TypeStore>,
    /// Request body validator, constructed once for the configured locale.
    pub validator: Arc<FieldValidator>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn TypeStore>, config: ServerConfig) -> Self {
        Self {
            store,
            validator: Arc::new(FieldValidator::new(config.validation_locale)),
            config: Arc::new(config),
        }
    }
}
