//! Typed accessors over the flat site-settings map.
//!
//! Settings are stored as free-form string key/value pairs with upsert
//! semantics so admins can add keys without a schema change. Core logic only
//! depends on two of them; this module names those keys and interprets their
//! values, leaving everything else opaque.

use std::collections::HashMap;

/// External monetization redirect used by the download gate.
pub const KEY_SHORTLINK_URL: &str = "shortlink_url";

/// Site-wide maintenance flag; stored as the string `"true"`/`"false"`.
pub const KEY_MAINTENANCE_MODE: &str = "maintenance_mode";

/// Typed view over the settings map for the keys core logic reads.
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    /// Monetization link, if an admin has saved one (may be empty).
    pub shortlink_url: Option<String>,
    /// Whether the site is closed for non-admin users.
    pub maintenance_mode: bool,
}

impl SiteConfig {
    /// Interpret the raw settings map.
    ///
    /// Unknown keys are ignored; a missing or non-`"true"` maintenance value
    /// means the site is open.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        Self {
            shortlink_url: map.get(KEY_SHORTLINK_URL).cloned(),
            maintenance_mode: map
                .get(KEY_MAINTENANCE_MODE)
                .is_some_and(|v| v == "true"),
        }
    }
}
