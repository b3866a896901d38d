//! Repository for the `download_history` ledger.

use sqlx::PgPool;

use logoforge_core::types::DbId;

use crate::models::download::{DownloadRecord, DownloadWithAsset};

/// Provides append and listing operations for the download ledger.
pub struct DownloadRepo;

impl DownloadRepo {
    /// Append a ledger row for an authenticated download.
    pub async fn append(
        pool: &PgPool,
        account_id: DbId,
        asset_id: DbId,
    ) -> Result<DownloadRecord, sqlx::Error> {
        sqlx::query_as::<_, DownloadRecord>(
            "INSERT INTO download_history (account_id, asset_id) \
             VALUES ($1, $2) \
             RETURNING id, account_id, asset_id, downloaded_at",
        )
        .bind(account_id)
        .bind(asset_id)
        .fetch_one(pool)
        .await
    }

    /// List an account's downloads, newest first, with asset titles.
    pub async fn list_by_account(
        pool: &PgPool,
        account_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DownloadWithAsset>, sqlx::Error> {
        sqlx::query_as::<_, DownloadWithAsset>(
            "SELECT d.id, d.asset_id, a.title AS asset_title, d.downloaded_at \
             FROM download_history d \
             LEFT JOIN assets a ON a.id = d.asset_id \
             WHERE d.account_id = $1 \
             ORDER BY d.downloaded_at DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(account_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Count ledger rows for an account.
    pub async fn count_by_account(pool: &PgPool, account_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM download_history WHERE account_id = $1")
                .bind(account_id)
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }

    /// Count ledger rows for an asset.
    pub async fn count_by_asset(pool: &PgPool, asset_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM download_history WHERE asset_id = $1")
                .bind(asset_id)
                .fetch_one(pool)
                .await?;
        Ok(count.0)
    }
}
