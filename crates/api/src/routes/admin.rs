//! Route definitions for the `/admin` resource (all require the admin role,
//! enforced per-handler via `RequireAdmin`).

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{accounts, moderation, settings};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /overview                -> moderation counts + account total
///
/// GET    /assets?status=          -> moderation queue / live list
/// POST   /assets                  -> direct publish (multipart, approved)
/// PUT    /assets/{id}             -> metadata edit
/// DELETE /assets/{id}             -> hard delete
/// POST   /assets/{id}/approve     -> approve (idempotent)
/// POST   /assets/{id}/reject      -> reject (optional reason)
///
/// GET    /accounts                -> list accounts
/// GET    /accounts/{id}           -> profile + uploads + ledger
/// DELETE /accounts/{id}           -> cascading delete
/// PUT    /accounts/{id}/role      -> change role
/// PUT    /accounts/{id}/status    -> block / unblock
///
/// GET    /settings                -> full rows for the editor
/// PUT    /settings                -> bulk upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(moderation::overview))
        .route(
            "/assets",
            get(moderation::list_assets).post(moderation::create_asset),
        )
        .route(
            "/assets/{id}",
            put(moderation::update_asset).delete(moderation::delete_asset),
        )
        .route("/assets/{id}/approve", post(moderation::approve_asset))
        .route("/assets/{id}/reject", post(moderation::reject_asset))
        .route("/accounts", get(accounts::list_accounts))
        .route(
            "/accounts/{id}",
            get(accounts::get_account).delete(accounts::delete_account),
        )
        .route("/accounts/{id}/role", put(accounts::set_role))
        .route("/accounts/{id}/status", put(accounts::set_status))
        .route(
            "/settings",
            get(settings::admin_settings).put(settings::save_settings),
        )
}
