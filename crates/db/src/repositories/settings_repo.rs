//! Repository for the `settings` table.
//!
//! Settings are a flat key/value map with upsert-by-key, last-write-wins
//! semantics. Keys are never deleted; concurrent admin saves simply
//! overwrite per key with no version check.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::models::setting::{Setting, SettingEntry};

/// Provides read/upsert operations for site settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Read every setting row.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        sqlx::query_as::<_, Setting>(
            "SELECT key, value, updated_at FROM settings ORDER BY key",
        )
        .fetch_all(pool)
        .await
    }

    /// Read every setting into a key -> value map.
    pub async fn get_map(pool: &PgPool) -> Result<HashMap<String, String>, sqlx::Error> {
        let rows = Self::get_all(pool).await?;
        Ok(rows.into_iter().map(|s| (s.key, s.value)).collect())
    }

    /// Read one setting value by key.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM settings WHERE key = $1")
            .bind(key)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    /// Upsert a batch of key/value pairs in a single transaction.
    pub async fn upsert_many(pool: &PgPool, entries: &[SettingEntry]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for entry in entries {
            sqlx::query(
                "INSERT INTO settings (key, value, updated_at) \
                 VALUES ($1, $2, now()) \
                 ON CONFLICT (key) \
                 DO UPDATE SET value = EXCLUDED.value, updated_at = now()",
            )
            .bind(&entry.key)
            .bind(&entry.value)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
