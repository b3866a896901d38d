use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ObjectStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: logoforge_db::DbPool,
    /// Server configuration (accessed by extractors and handlers).
    pub config: Arc<ServerConfig>,
    /// Blob storage for uploaded asset files.
    pub store: Arc<dyn ObjectStore>,
}
