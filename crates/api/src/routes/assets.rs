//! Route definitions for the `/assets` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{assets, downloads};
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET  /               -> list_assets (public, approved only)
/// POST /               -> create_asset (requires auth, enters moderation)
/// GET  /{id}           -> get_asset (owner/admin see non-approved)
/// POST /{id}/view      -> record_view (public, 204)
/// POST /{id}/download  -> request_download (the access gate)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route("/{id}", get(assets::get_asset))
        .route("/{id}/view", post(assets::record_view))
        .route("/{id}/download", post(downloads::request_download))
}
