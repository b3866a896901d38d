//! Route definitions for the `/me` resource (all require auth).

use axum::routing::get;
use axum::Router;

use crate::handlers::{accounts, assets, downloads};
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET /           -> me
/// PUT /           -> update_me (profile fields)
/// GET /assets     -> my_assets (own submissions, any status)
/// GET /downloads  -> my_downloads (ledger)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(accounts::me).put(accounts::update_me))
        .route("/assets", get(assets::my_assets))
        .route("/downloads", get(downloads::my_downloads))
}
