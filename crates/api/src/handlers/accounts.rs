//! Account handlers: the caller's own profile plus admin account management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use logoforge_core::error::CoreError;
use logoforge_core::roles::{validate_account_status, validate_role};
use logoforge_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use logoforge_core::types::DbId;
use logoforge_db::models::account::{AccountInfo, UpdateProfile};
use logoforge_db::models::asset::Asset;
use logoforge_db::models::download::DownloadWithAsset;
use logoforge_db::repositories::{AccountRepo, AssetRepo, DownloadRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for paged account listings.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `PUT /admin/accounts/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: String,
}

/// Request body for `PUT /admin/accounts/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// Admin account detail: profile plus everything the account has done.
#[derive(Debug, Serialize)]
pub struct AccountDetail {
    pub account: AccountInfo,
    pub uploads: Vec<Asset>,
    pub downloads: Vec<DownloadWithAsset>,
}

// ---------------------------------------------------------------------------
// Self-service profile
// ---------------------------------------------------------------------------

/// GET /api/v1/me
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<AccountInfo>>> {
    let account = AccountRepo::find_by_id(&state.pool, user.account_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "account",
            id: user.account_id,
        }))?;
    Ok(Json(DataResponse {
        data: account.into(),
    }))
}

/// PUT /api/v1/me
///
/// Update the caller's own profile fields; absent fields are untouched.
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<AccountInfo>>> {
    let account = AccountRepo::update_profile(&state.pool, user.account_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "account",
            id: user.account_id,
        }))?;
    Ok(Json(DataResponse {
        data: account.into(),
    }))
}

// ---------------------------------------------------------------------------
// Admin account management
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<DataResponse<Vec<AccountInfo>>>> {
    let limit = clamp_limit(query.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(query.offset);

    let accounts = AccountRepo::list_all(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: accounts }))
}

/// GET /api/v1/admin/accounts/{id}
///
/// Profile, uploads, and the download ledger in one view.
pub async fn get_account(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AccountDetail>>> {
    let account = AccountRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "account",
            id,
        }))?;

    let uploads = AssetRepo::list_by_owner(&state.pool, id).await?;
    let downloads =
        DownloadRepo::list_by_account(&state.pool, id, DEFAULT_LIST_LIMIT, 0).await?;

    Ok(Json(DataResponse {
        data: AccountDetail {
            account: account.into(),
            uploads,
            downloads,
        },
    }))
}

/// PUT /api/v1/admin/accounts/{id}/role
pub async fn set_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetRoleRequest>,
) -> AppResult<Json<DataResponse<AccountInfo>>> {
    validate_role(&input.role).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let account = AccountRepo::set_role(&state.pool, id, &input.role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "account",
            id,
        }))?;

    tracing::info!(
        account_id = id,
        admin_id = admin.account_id,
        role = %input.role,
        "Account role changed"
    );

    Ok(Json(DataResponse {
        data: account.into(),
    }))
}

/// PUT /api/v1/admin/accounts/{id}/status
///
/// Blocking an account locks it out at the next login; existing tokens
/// run out on their own expiry.
pub async fn set_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<DataResponse<AccountInfo>>> {
    validate_account_status(&input.status)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let account = AccountRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "account",
            id,
        }))?;

    tracing::info!(
        account_id = id,
        admin_id = admin.account_id,
        status = %input.status,
        "Account status changed"
    );

    Ok(Json(DataResponse {
        data: account.into(),
    }))
}

/// DELETE /api/v1/admin/accounts/{id}
///
/// Transactional cascade: ledger rows go, owned assets are orphaned.
pub async fn delete_account(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == admin.account_id {
        return Err(AppError::Core(CoreError::Validation(
            "Admins cannot delete their own account".into(),
        )));
    }

    let deleted = AccountRepo::delete_cascading(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "account",
            id,
        }));
    }

    tracing::info!(account_id = id, admin_id = admin.account_id, "Account deleted");

    Ok(StatusCode::NO_CONTENT)
}
