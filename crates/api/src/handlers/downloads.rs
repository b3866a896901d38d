//! Handlers for the download gate and the caller's download history.
//!
//! The gate decision itself lives in `logoforge_core::gate`; this module
//! wires it to settings, counters, and the ledger. The counter increment
//! happens before the ledger append so a vanished asset produces a clean
//! 404 with nothing applied.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use logoforge_core::error::CoreError;
use logoforge_core::gate::{self, GateOutcome};
use logoforge_core::moderation::STATUS_APPROVED;
use logoforge_core::roles::ROLE_ADMIN;
use logoforge_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use logoforge_core::settings::SiteConfig;
use logoforge_core::types::{DbId, UnixMillis};
use logoforge_core::variant::{download_filename, VariantKind};
use logoforge_db::models::asset::Asset;
use logoforge_db::models::download::DownloadWithAsset;
use logoforge_db::repositories::{AssetRepo, DownloadRepo, SettingsRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /assets/{id}/download`.
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    /// Which attached file the caller wants.
    pub variant: VariantKind,
    /// The access-token expiry instant the client holds, if any (ms).
    pub token_expires_at: Option<UnixMillis>,
}

/// Response body for the gate. Exactly one of the outcome-specific field
/// groups is populated.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    /// `allow`, `require_auth`, or `require_token`.
    pub outcome: &'static str,
    /// Resource location (populated on `allow`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Suggested download filename (populated on `allow`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Monetization link to visit (populated on `require_token`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortlink: Option<String>,
    /// Expiry instant the client should store once the monetization step
    /// completes (populated on `require_token`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<UnixMillis>,
    /// The presented token is stale and must be removed client-side.
    pub purge_stale_token: bool,
}

/// Query parameters for `GET /me/downloads`.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/assets/{id}/download
///
/// Evaluate the access gate for one variant of one asset. On `allow` the
/// download counter is incremented and, for signed-in callers, a ledger
/// row is appended. The other outcomes apply nothing.
pub async fn request_download(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DownloadRequest>,
) -> AppResult<Json<DownloadResponse>> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "asset", id }))?;

    if !downloadable_by(&asset, user.as_ref()) {
        return Err(AppError::Core(CoreError::NotFound { entity: "asset", id }));
    }

    // The variant must actually be attached before any gate logic runs.
    let url = variant_url(&asset, input.variant).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Asset has no {} variant",
            input.variant.as_str()
        )))
    })?;

    let settings = SettingsRepo::get_map(&state.pool).await?;
    let site = SiteConfig::from_map(&settings);

    let now = chrono::Utc::now().timestamp_millis();
    let outcome = gate::evaluate(
        input.variant,
        user.is_some(),
        site.shortlink_url.as_deref(),
        input.token_expires_at,
        now,
    );

    match outcome {
        GateOutcome::Allow => {
            let found = AssetRepo::increment_downloads(&state.pool, id).await?;
            if !found {
                return Err(AppError::Core(CoreError::NotFound { entity: "asset", id }));
            }

            if let Some(ref u) = user {
                DownloadRepo::append(&state.pool, u.account_id, id).await?;
            }

            tracing::info!(
                asset_id = id,
                variant = input.variant.as_str(),
                authenticated = user.is_some(),
                "Download allowed"
            );

            Ok(Json(DownloadResponse {
                outcome: "allow",
                url: Some(url),
                filename: Some(download_filename(&asset.title, input.variant)),
                shortlink: None,
                token_expires_at: None,
                purge_stale_token: false,
            }))
        }

        GateOutcome::RequireAuth => Ok(Json(DownloadResponse {
            outcome: "require_auth",
            url: None,
            filename: None,
            shortlink: None,
            token_expires_at: None,
            purge_stale_token: false,
        })),

        GateOutcome::RequireToken { purge_stale_token } => Ok(Json(DownloadResponse {
            outcome: "require_token",
            url: None,
            filename: None,
            shortlink: site.shortlink_url,
            token_expires_at: Some(gate::issue_expiry(now)),
            purge_stale_token,
        })),
    }
}

/// GET /api/v1/me/downloads
///
/// The caller's download ledger, newest first, with asset titles.
pub async fn my_downloads(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<DataResponse<Vec<DownloadWithAsset>>>> {
    let limit = clamp_limit(query.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(query.offset);

    let downloads =
        DownloadRepo::list_by_account(&state.pool, user.account_id, limit, offset).await?;
    Ok(Json(DataResponse { data: downloads }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Downloads follow the same visibility rule as the detail view: approved
/// assets for everyone, own or any asset for owner/admin respectively.
fn downloadable_by(asset: &Asset, user: Option<&AuthUser>) -> bool {
    if asset.status == STATUS_APPROVED {
        return true;
    }
    match user {
        Some(u) => u.role == ROLE_ADMIN || asset.owner_id == Some(u.account_id),
        None => false,
    }
}

/// The stored location for a given variant, if that variant is attached.
fn variant_url(asset: &Asset, variant: VariantKind) -> Option<String> {
    match variant {
        VariantKind::Image => Some(asset.image_url.clone()),
        VariantKind::ProjectFile => asset.project_file_url.clone(),
        VariantKind::VectorData => asset.vector_data_url.clone(),
    }
}
