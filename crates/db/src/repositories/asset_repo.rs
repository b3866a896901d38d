//! Repository for the `assets` table.
//!
//! Covers creation through the two submission channels, public and
//! moderation listings, status transitions, and the atomic view/download
//! counters. Counter updates are single UPDATE statements so concurrent
//! increments from different sessions all land; callers must never
//! read-modify-write these columns.

use sqlx::PgPool;

use logoforge_core::types::DbId;

use crate::models::asset::{
    Asset, AssetWithUploader, CreateAsset, ListAssetsParams, UpdateAsset,
};

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "\
    id, title, description, category, \
    image_url, project_file_url, vector_data_url, \
    youtube_url, ai_prompt, \
    status, rejection_reason, views, downloads, \
    owner_id, created_at";

/// Provides CRUD and counter operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert a new asset. The caller supplies the initial status derived
    /// from the submission channel.
    pub async fn create(pool: &PgPool, input: &CreateAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (\
                title, description, category, \
                image_url, project_file_url, vector_data_url, \
                youtube_url, ai_prompt, owner_id, status\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.title)
            .bind(input.description.as_deref())
            .bind(input.category.as_deref())
            .bind(&input.image_url)
            .bind(input.project_file_url.as_deref())
            .bind(input.vector_data_url.as_deref())
            .bind(input.youtube_url.as_deref())
            .bind(input.ai_prompt.as_deref())
            .bind(input.owner_id)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an asset joined with its uploader's public profile.
    pub async fn find_with_uploader(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AssetWithUploader>, sqlx::Error> {
        sqlx::query_as::<_, AssetWithUploader>(
            "SELECT \
                a.id, a.title, a.description, a.category, \
                a.image_url, a.project_file_url, a.vector_data_url, \
                a.youtube_url, a.ai_prompt, \
                a.status, a.rejection_reason, a.views, a.downloads, \
                a.owner_id, a.created_at, \
                p.email AS uploader_email, \
                p.display_name AS uploader_display_name, \
                p.avatar_url AS uploader_avatar_url \
             FROM assets a \
             LEFT JOIN accounts p ON p.id = a.owner_id \
             WHERE a.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List approved assets with optional category/title filters and
    /// leaderboard-style ordering.
    pub async fn list_public(
        pool: &PgPool,
        params: &ListAssetsParams,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let mut conditions = vec!["status = 'approved'".to_string()];
        let mut bind_idx = 1u32;

        if params.category.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.search.is_some() {
            conditions.push(format!("title ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE {conditions} \
             ORDER BY {order} \
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            conditions = conditions.join(" AND "),
            order = params.sort.order_clause(),
            limit_idx = bind_idx,
            offset_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Asset>(&query);
        if let Some(ref category) = params.category {
            q = q.bind(category);
        }
        if let Some(ref search) = params.search {
            q = q.bind(format!("%{search}%"));
        }
        q.bind(params.limit).bind(params.offset).fetch_all(pool).await
    }

    /// List assets in a given moderation status, newest first (admin views).
    pub async fn list_by_status(
        pool: &PgPool,
        status: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE status = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List all assets owned by an account, any status, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets \
             WHERE owner_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Count assets in a given status (admin overview cards).
    pub async fn count_by_status(pool: &PgPool, status: &str) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets WHERE status = $1")
            .bind(status)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Update admin-editable metadata fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                category = COALESCE($4, category), \
                vector_data_url = COALESCE($5, vector_data_url), \
                youtube_url = COALESCE($6, youtube_url) \
             WHERE id = $1 \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.category.as_deref())
            .bind(input.vector_data_url.as_deref())
            .bind(input.youtube_url.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Set the moderation status. The rejection reason is cleared on
    /// approval and stored on rejection.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
        rejection_reason: Option<&str>,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET status = $2, rejection_reason = $3 \
             WHERE id = $1 \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(status)
            .bind(rejection_reason)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an asset. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Counters
    // -----------------------------------------------------------------------

    /// Atomically add one to the view counter. Returns false when the asset
    /// no longer exists; nothing is applied in that case.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE assets SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically add one to the download counter. Returns false when the
    /// asset no longer exists; nothing is applied in that case.
    pub async fn increment_downloads(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE assets SET downloads = downloads + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
