//! Site-settings handlers: public read for the frontend, admin bulk save.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;

use logoforge_db::models::setting::{Setting, SettingEntry};
use logoforge_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings/public
///
/// The full key/value map. Settings hold display configuration only
/// (hero copy, links, the monetization shortlink); nothing secret lives
/// here.
pub async fn public_settings(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<HashMap<String, String>>>> {
    let map = SettingsRepo::get_map(&state.pool).await?;
    Ok(Json(DataResponse { data: map }))
}

/// GET /api/v1/admin/settings
///
/// Full rows including update timestamps, for the admin editor.
pub async fn admin_settings(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Setting>>>> {
    let settings = SettingsRepo::get_all(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/admin/settings
///
/// Bulk upsert, last write wins. Unknown keys are stored as-is so admins
/// can add configuration without a schema change.
pub async fn save_settings(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(entries): Json<Vec<SettingEntry>>,
) -> AppResult<Json<DataResponse<Vec<Setting>>>> {
    SettingsRepo::upsert_many(&state.pool, &entries).await?;

    tracing::info!(
        admin_id = admin.account_id,
        count = entries.len(),
        "Settings saved"
    );

    let settings = SettingsRepo::get_all(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}
