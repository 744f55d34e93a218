//! HTTP surface for storing and reading samples.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod validation;

pub use dto::*;
pub use error::{ApiError, ApiResult};
pub use validation::{SampleJson, SampleJsonRejection, SAMPLE_SCHEMA_HELP};

use axum::{
    routing::{get, post},
    Router,
};
use samplestat_core::SampleStore;
use samplestat_storage::SampleRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub samples: Arc<dyn SampleStore>,
}

impl AppState {
    pub fn new(samples: Arc<dyn SampleStore>) -> Self {
        Self { samples }
    }

    /// State backed by the SQLite sample repository.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(Arc::new(SampleRepository::new(pool)))
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::greeting))
        .route("/health", get(handlers::root::health))
        .route("/api/samples", get(handlers::samples::list))
        .route("/api/sample", post(handlers::samples::create))
        .route("/api/sample/:id/statistics", get(handlers::samples::statistics))
        .with_state(state)
}
