#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use iris_admin_core::listing::SortDirection;
use iris_admin_core::types::DbId;
use iris_admin_core::validation::Locale;
use iris_admin_db::models::category_type::{CategoryType, CreateCategoryType, TypeListQuery};
use iris_admin_db::store::{SqlxError, StoreError, TypeStore};
use tower::ServiceExt;

use iris_admin_api::config::ServerConfig;
use iris_admin_api::router::build_app_router;
use iris_admin_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(locale: Locale) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        validation_locale: locale,
    }
}

/// Build the full application router over `store`, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<MemoryTypeStore>) -> Router {
    build_test_app_with_locale(store, Locale::Zh)
}

pub fn build_test_app_with_locale(store: Arc<MemoryTypeStore>, locale: Locale) -> Router {
    let config = test_config(locale);
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Failure the store should produce on its next call.
#[derive(Debug, Clone, Copy)]
pub enum Fault {
    Database,
    Duplicate,
    /// Writes succeed but hand back a record with id 0.
    ZeroId,
}

/// [`TypeStore`] over a `Vec`, counting every call so tests can assert
/// that a request never reached persistence.
#[derive(Default)]
pub struct MemoryTypeStore {
    rows: Mutex<Vec<CategoryType>>,
    next_id: Mutex<DbId>,
    fault: Mutex<Option<Fault>>,
    calls: AtomicUsize,
}

impl MemoryTypeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert rows directly, bypassing the call counter. Creation times
    /// increase with position.
    pub fn seed(&self, names: &[&str]) -> Vec<CategoryType> {
        names
            .iter()
            .map(|name| self.insert(&input(name)))
            .collect()
    }

    pub fn fail_with(&self, fault: Fault) {
        *self.fault.lock().unwrap() = Some(fault);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn enter(&self) -> Option<Fault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fault.lock().unwrap().take()
    }

    fn insert(&self, input: &CreateCategoryType) -> CategoryType {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(*next_id);
        let row = CategoryType {
            id: *next_id,
            name: input.name.clone(),
            display_name: input.display_name.clone(),
            description: input.description.clone(),
            level: input.level.clone(),
            created_at: ts,
            updated_at: ts,
        };
        self.rows.lock().unwrap().push(row.clone());
        row
    }
}

fn injected(fault: Fault) -> StoreError {
    match fault {
        Fault::Database | Fault::ZeroId => {
            StoreError::Database(SqlxError::Protocol("injected failure".into()))
        }
        Fault::Duplicate => StoreError::Duplicate("uq_types_name".into()),
    }
}

fn sort_key(row: &CategoryType, column: &str) -> (String, DbId) {
    let key = match column {
        "name" => row.name.clone(),
        "display_name" => row.display_name.clone(),
        "level" => row.level.clone(),
        "created_at" => row.created_at.to_rfc3339(),
        "updated_at" => row.updated_at.to_rfc3339(),
        _ => format!("{:020}", row.id),
    };
    (key, row.id)
}

#[async_trait]
impl TypeStore for MemoryTypeStore {
    async fn get_by_id(&self, id: DbId) -> Result<CategoryType, StoreError> {
        if let Some(fault) = self.enter() {
            return Err(injected(fault));
        }
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, input: &CreateCategoryType) -> Result<CategoryType, StoreError> {
        match self.enter() {
            Some(Fault::ZeroId) => {
                let mut row = self.insert(input);
                row.id = 0;
                return Ok(row);
            }
            Some(fault) => return Err(injected(fault)),
            None => {}
        }
        if self.rows.lock().unwrap().iter().any(|r| r.name == input.name) {
            return Err(StoreError::Duplicate("uq_types_name".into()));
        }
        Ok(self.insert(input))
    }

    async fn update_by_id(
        &self,
        id: DbId,
        input: &CreateCategoryType,
    ) -> Result<CategoryType, StoreError> {
        if let Some(fault) = self.enter() {
            return Err(injected(fault));
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;
        row.name = input.name.clone();
        row.display_name = input.display_name.clone();
        row.description = input.description.clone();
        row.level = input.level.clone();
        row.updated_at += Duration::seconds(1);
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        if let Some(fault) = self.enter() {
            return Err(injected(fault));
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            Err(StoreError::NotFound)
        } else {
            Ok(())
        }
    }

    async fn list(&self, query: &TypeListQuery) -> Result<Vec<CategoryType>, StoreError> {
        if let Some(fault) = self.enter() {
            return Err(injected(fault));
        }
        let needle = query.search.as_deref().map(str::to_lowercase);
        let mut rows: Vec<CategoryType> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| match &needle {
                Some(n) => r.name.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .cloned()
            .collect();

        rows.sort_by_key(|r| sort_key(r, query.order.column));
        if query.order.direction == SortDirection::Desc {
            rows.reverse();
        }

        Ok(rows
            .into_iter()
            .skip(usize::try_from(query.skip).unwrap_or(0))
            .take(usize::try_from(query.limit).unwrap_or(0))
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        match self.enter() {
            Some(fault) => Err(injected(fault)),
            None => Ok(()),
        }
    }
}

pub fn input(name: &str) -> CreateCategoryType {
    CreateCategoryType {
        name: name.to_string(),
        display_name: format!("{name} display"),
        description: format!("about {name}"),
        level: "1".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
