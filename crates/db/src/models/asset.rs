//! Asset entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use logoforge_core::types::{DbId, Timestamp};

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: String,
    pub project_file_url: Option<String>,
    pub vector_data_url: Option<String>,
    pub youtube_url: Option<String>,
    pub ai_prompt: Option<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub views: i64,
    pub downloads: i64,
    pub owner_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// An asset joined with its uploader's public profile, for detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetWithUploader {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: String,
    pub project_file_url: Option<String>,
    pub vector_data_url: Option<String>,
    pub youtube_url: Option<String>,
    pub ai_prompt: Option<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub views: i64,
    pub downloads: i64,
    pub owner_id: Option<DbId>,
    pub created_at: Timestamp,
    pub uploader_email: Option<String>,
    pub uploader_display_name: Option<String>,
    pub uploader_avatar_url: Option<String>,
}

/// Insert DTO for a new asset. The status comes from the submission channel,
/// never from the client.
#[derive(Debug, Clone)]
pub struct CreateAsset {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: String,
    pub project_file_url: Option<String>,
    pub vector_data_url: Option<String>,
    pub youtube_url: Option<String>,
    pub ai_prompt: Option<String>,
    pub owner_id: Option<DbId>,
    pub status: String,
}

/// Update DTO for the admin metadata-edit path.
#[derive(Debug, Deserialize)]
pub struct UpdateAsset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub vector_data_url: Option<String>,
    pub youtube_url: Option<String>,
}

/// Ordering for public listings. `Downloads`/`Views` power the
/// leaderboard and contest views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetSort {
    #[default]
    Newest,
    Downloads,
    Views,
}

impl AssetSort {
    /// The ORDER BY clause for this sort. Values are fixed strings, never
    /// client input.
    pub fn order_clause(self) -> &'static str {
        match self {
            AssetSort::Newest => "created_at DESC",
            AssetSort::Downloads => "downloads DESC, created_at DESC",
            AssetSort::Views => "views DESC, created_at DESC",
        }
    }
}

/// Filter parameters for the public asset listing.
#[derive(Debug, Default)]
pub struct ListAssetsParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: AssetSort,
    pub limit: i64,
    pub offset: i64,
}
