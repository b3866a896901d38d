//! Route definitions for the public `/settings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET /public  -> public_settings (unauthenticated frontend config)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/public", get(settings::public_settings))
}
