//! Handlers for the public asset catalogue and self-service submissions.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use logoforge_core::error::CoreError;
use logoforge_core::moderation::{validate_submission, SubmissionChannel, STATUS_APPROVED};
use logoforge_core::roles::ROLE_ADMIN;
use logoforge_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use logoforge_core::types::DbId;
use logoforge_db::models::asset::{
    Asset, AssetSort, AssetWithUploader, CreateAsset, ListAssetsParams,
};
use logoforge_db::repositories::AssetRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::sanitize_object_name;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /assets`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<AssetSort>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/assets
///
/// Approved assets only. `sort=downloads`/`sort=views` powers the
/// leaderboard and contest views; `category` doubles as the contest tag.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<Asset>>>> {
    let params = ListAssetsParams {
        category: query.category.filter(|c| !c.trim().is_empty()),
        search: query.search.filter(|s| !s.trim().is_empty()),
        sort: query.sort.unwrap_or_default(),
        limit: clamp_limit(query.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
        offset: clamp_offset(query.offset),
    };

    let assets = AssetRepo::list_public(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// GET /api/v1/assets/{id}
///
/// Detail view with the uploader's public profile. Pending and rejected
/// assets are visible only to their owner and to admins; everyone else
/// gets a 404 rather than a hint that the asset exists.
pub async fn get_asset(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AssetWithUploader>>> {
    let asset = AssetRepo::find_with_uploader(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "asset", id }))?;

    if !asset_visible_to(&asset, user.as_ref()) {
        return Err(AppError::Core(CoreError::NotFound { entity: "asset", id }));
    }

    Ok(Json(DataResponse { data: asset }))
}

/// POST /api/v1/assets/{id}/view
///
/// Fire-and-forget view increment: always 204, whatever happens to the
/// counter. A vanished asset or a store hiccup is logged and swallowed;
/// view tracking is never worth failing a page load over. Repeated views
/// from the same caller all count; there is no dedup window.
pub async fn record_view(State(state): State<AppState>, Path(id): Path<DbId>) -> StatusCode {
    match AssetRepo::increment_views(&state.pool, id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(asset_id = id, "View recorded against a missing asset");
        }
        Err(err) => {
            tracing::warn!(asset_id = id, error = %err, "View increment failed");
        }
    }
    StatusCode::NO_CONTENT
}

/// POST /api/v1/assets
///
/// Multipart self-service submission. The asset enters the moderation
/// queue as `pending`; the status never comes from the client.
pub async fn create_asset(
    State(state): State<AppState>,
    user: AuthUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Asset>>)> {
    let upload = collect_asset_upload(multipart).await?;

    validate_submission(
        SubmissionChannel::SelfService,
        &upload.title,
        &upload.category,
        upload.image.is_some(),
    )?;

    let prefix = format!("uploads/{}", user.account_id);
    let input = store_upload(
        &state,
        upload,
        &prefix,
        Some(user.account_id),
        SubmissionChannel::SelfService,
    )
    .await?;

    let asset = AssetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        asset_id = asset.id,
        owner_id = user.account_id,
        "Asset submitted for moderation"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/me/assets
///
/// All of the caller's own submissions, any status, newest first.
pub async fn my_assets(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Asset>>>> {
    let assets = AssetRepo::list_by_owner(&state.pool, user.account_id).await?;
    Ok(Json(DataResponse { data: assets }))
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Whether a caller may see a given asset's detail view.
fn asset_visible_to(asset: &AssetWithUploader, user: Option<&AuthUser>) -> bool {
    if asset.status == STATUS_APPROVED {
        return true;
    }
    match user {
        Some(u) => u.role == ROLE_ADMIN || asset.owner_id == Some(u.account_id),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Multipart plumbing (shared with the admin direct-publish path)
// ---------------------------------------------------------------------------

/// One uploaded file part: original filename plus raw bytes.
pub(crate) struct FilePart {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// The parsed multipart form for an asset submission.
#[derive(Default)]
pub(crate) struct AssetUpload {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub youtube_url: Option<String>,
    pub ai_prompt: Option<String>,
    pub image: Option<FilePart>,
    pub project_file: Option<FilePart>,
    pub vector_data: Option<FilePart>,
}

/// Drain a multipart stream into an [`AssetUpload`]. Unknown fields are
/// ignored so frontend form changes do not break submissions.
pub(crate) async fn collect_asset_upload(mut multipart: Multipart) -> Result<AssetUpload, AppError> {
    let mut upload = AssetUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "title" => upload.title = read_text(field).await?,
            "description" => upload.description = Some(read_text(field).await?),
            "category" => upload.category = read_text(field).await?,
            "youtube_url" => upload.youtube_url = Some(read_text(field).await?),
            "ai_prompt" => upload.ai_prompt = Some(read_text(field).await?),
            "image" => upload.image = Some(read_file(field).await?),
            "project_file" => upload.project_file = Some(read_file(field).await?),
            "vector_data" => upload.vector_data = Some(read_file(field).await?),
            _ => {}
        }
    }

    Ok(upload)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn read_file(field: axum::extract::multipart::Field<'_>) -> Result<FilePart, AppError> {
    let name = field.file_name().unwrap_or("file").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(FilePart {
        name,
        bytes: bytes.to_vec(),
    })
}

/// Write the uploaded variants into blob storage and assemble the insert
/// DTO. `prefix` namespaces the stored paths (`uploads/{account_id}` for
/// self-service, empty for admin uploads).
pub(crate) async fn store_upload(
    state: &AppState,
    upload: AssetUpload,
    prefix: &str,
    owner_id: Option<DbId>,
    channel: SubmissionChannel,
) -> Result<CreateAsset, AppError> {
    let image = upload.image.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Main image is required".into()))
    })?;

    let image_url = store_variant(state, prefix, &image).await?;

    let project_file_url = match upload.project_file {
        Some(ref part) => Some(store_variant(state, prefix, part).await?),
        None => None,
    };
    let vector_data_url = match upload.vector_data {
        Some(ref part) => Some(store_variant(state, prefix, part).await?),
        None => None,
    };

    Ok(CreateAsset {
        title: upload.title.trim().to_string(),
        description: upload.description.filter(|d| !d.trim().is_empty()),
        category: Some(upload.category.trim().to_string()).filter(|c| !c.is_empty()),
        image_url,
        project_file_url,
        vector_data_url,
        youtube_url: upload.youtube_url.filter(|u| !u.trim().is_empty()),
        ai_prompt: upload.ai_prompt.filter(|p| !p.trim().is_empty()),
        owner_id,
        status: channel.initial_status().to_string(),
    })
}

/// Store a single file part under `{prefix}/{timestamp}_{sanitized_name}`
/// and return its public URL.
async fn store_variant(
    state: &AppState,
    prefix: &str,
    part: &FilePart,
) -> Result<String, AppError> {
    let stamp = chrono::Utc::now().timestamp_millis();
    let clean = sanitize_object_name(&part.name);
    let path = if prefix.is_empty() {
        format!("{stamp}_{clean}")
    } else {
        format!("{prefix}/{stamp}_{clean}")
    };

    state
        .store
        .put(&path, &part.bytes)
        .await
        .map_err(|e| AppError::Internal(format!("Blob store write failed: {e}")))?;

    Ok(state.store.public_url(&path))
}
