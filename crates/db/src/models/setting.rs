//! Site-settings entity models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use logoforge_core::types::Timestamp;

/// A row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
}

/// One key/value pair in a bulk settings save.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingEntry {
    pub key: String,
    pub value: String,
}
