//! Download-ledger entity models.

use serde::Serialize;
use sqlx::FromRow;

use logoforge_core::types::{DbId, Timestamp};

/// A row from the `download_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DownloadRecord {
    pub id: DbId,
    pub account_id: DbId,
    pub asset_id: DbId,
    pub downloaded_at: Timestamp,
}

/// A ledger row joined with the asset title for history listings.
/// The title is optional because the asset may have been deleted since.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DownloadWithAsset {
    pub id: DbId,
    pub asset_id: DbId,
    pub asset_title: Option<String>,
    pub downloaded_at: Timestamp,
}
