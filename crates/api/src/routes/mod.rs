pub mod admin;
pub mod assets;
pub mod auth;
pub mod health;
pub mod me;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                     register + sign in (public)
/// /auth/login                      sign in (public; blocked -> 403)
/// /auth/password                   change own password (requires auth)
///
/// /assets                          list approved (public), submit (auth)
/// /assets/{id}                     detail incl. uploader profile
/// /assets/{id}/view                view increment (public, 204)
/// /assets/{id}/download            access gate (counters + ledger on allow)
///
/// /me                              own profile (get, put)
/// /me/assets                       own submissions, any status
/// /me/downloads                    download ledger
///
/// /settings/public                 frontend display config (public)
///
/// /admin/overview                  moderation counts (admin only)
/// /admin/assets                    queue list, direct publish
/// /admin/assets/{id}               metadata edit, hard delete
/// /admin/assets/{id}/approve       approve (idempotent)
/// /admin/assets/{id}/reject        reject (optional reason)
/// /admin/accounts                  list
/// /admin/accounts/{id}             detail, cascading delete
/// /admin/accounts/{id}/role        change role
/// /admin/accounts/{id}/status      block / unblock
/// /admin/settings                  editor rows, bulk upsert
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/assets", assets::router())
        .nest("/me", me::router())
        .nest("/settings", settings::router())
        .nest("/admin", admin::router())
}
