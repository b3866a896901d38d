//! Admin-side asset management: the moderation queue, decisions, direct
//! publishing, metadata edits, and hard deletes.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use logoforge_core::error::CoreError;
use logoforge_core::moderation::{
    validate_transition, Decision, SubmissionChannel, Transition, STATUS_APPROVED,
    STATUS_PENDING, STATUS_REJECTED, VALID_STATUSES,
};
use logoforge_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use logoforge_core::types::DbId;
use logoforge_db::models::asset::{Asset, UpdateAsset};
use logoforge_db::repositories::{AccountRepo, AssetRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::assets::{collect_asset_upload, store_upload};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/assets`.
#[derive(Debug, Deserialize)]
pub struct AdminListQuery {
    /// Moderation status to list; defaults to the pending queue.
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `POST /admin/assets/{id}/reject`.
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    pub reason: Option<String>,
}

/// Dashboard counts for the admin overview cards.
#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub pending_assets: i64,
    pub approved_assets: i64,
    pub rejected_assets: i64,
    pub total_accounts: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/assets?status=
///
/// One moderation bucket at a time, newest first.
pub async fn list_assets(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<AdminListQuery>,
) -> AppResult<Json<DataResponse<Vec<Asset>>>> {
    let status = query.status.unwrap_or_else(|| STATUS_PENDING.to_string());
    if !VALID_STATUSES.contains(&status.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))));
    }

    let limit = clamp_limit(query.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(query.offset);

    let assets = AssetRepo::list_by_status(&state.pool, &status, limit, offset).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/admin/overview
pub async fn overview(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<AdminOverview>>> {
    let pending_assets = AssetRepo::count_by_status(&state.pool, STATUS_PENDING).await?;
    let approved_assets = AssetRepo::count_by_status(&state.pool, STATUS_APPROVED).await?;
    let rejected_assets = AssetRepo::count_by_status(&state.pool, STATUS_REJECTED).await?;
    let total_accounts = AccountRepo::count(&state.pool).await?;

    Ok(Json(DataResponse {
        data: AdminOverview {
            pending_assets,
            approved_assets,
            rejected_assets,
            total_accounts,
        },
    }))
}

/// POST /api/v1/admin/assets
///
/// Direct publish: the asset skips moderation and lands `approved`.
/// Admin-seeded assets carry no owner.
pub async fn create_asset(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Asset>>)> {
    let upload = collect_asset_upload(multipart).await?;

    if upload.image.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Main image is required".into(),
        )));
    }

    let input = store_upload(&state, upload, "", None, SubmissionChannel::AdminDirect).await?;
    let asset = AssetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        asset_id = asset.id,
        admin_id = admin.account_id,
        "Asset published directly"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// POST /api/v1/admin/assets/{id}/approve
///
/// Idempotent: re-approving an approved asset returns it unchanged.
pub async fn approve_asset(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let asset = apply_decision(&state, admin.account_id, id, Decision::Approve, None).await?;
    Ok(Json(DataResponse { data: asset }))
}

/// POST /api/v1/admin/assets/{id}/reject
pub async fn reject_asset(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    body: Option<Json<RejectRequest>>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let reason = body
        .map(|Json(b)| b.reason)
        .unwrap_or_default()
        .filter(|r| !r.trim().is_empty());

    let asset = apply_decision(&state, admin.account_id, id, Decision::Reject, reason).await?;
    Ok(Json(DataResponse { data: asset }))
}

/// PUT /api/v1/admin/assets/{id}
///
/// Metadata edit; absent fields are left untouched.
pub async fn update_asset(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "asset", id }))?;
    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/admin/assets/{id}
///
/// Hard delete; the only exit from `approved`. Ledger rows referencing the
/// asset cascade away with it.
pub async fn delete_asset(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AssetRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "asset", id }));
    }

    tracing::info!(asset_id = id, admin_id = admin.account_id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Decision plumbing
// ---------------------------------------------------------------------------

/// Validate and apply a moderation decision. A [`Transition::Noop`] returns
/// the asset untouched so repeated admin clicks never re-apply side effects.
async fn apply_decision(
    state: &AppState,
    admin_id: DbId,
    id: DbId,
    decision: Decision,
    reason: Option<String>,
) -> Result<Asset, AppError> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "asset", id }))?;

    match validate_transition(&asset.status, decision)? {
        Transition::Noop => Ok(asset),
        Transition::Apply => {
            let updated = AssetRepo::set_status(
                &state.pool,
                id,
                decision.target_status(),
                reason.as_deref(),
            )
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "asset", id }))?;

            tracing::info!(
                asset_id = id,
                admin_id,
                status = %updated.status,
                "Moderation decision applied"
            );

            Ok(updated)
        }
    }
}
