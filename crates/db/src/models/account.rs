//! Account entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use logoforge_core::types::{DbId, Timestamp};

/// A full row from the `accounts` table. Never serialized to clients
/// directly; convert to [`AccountInfo`] first so the password hash stays
/// server-side.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: Timestamp,
}

/// Client-safe projection of an account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccountInfo {
    pub id: DbId,
    pub email: String,
    pub role: String,
    pub status: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: Timestamp,
}

impl From<Account> for AccountInfo {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            email: a.email,
            role: a.role,
            status: a.status,
            display_name: a.display_name,
            bio: a.bio,
            avatar_url: a.avatar_url,
            banner_url: a.banner_url,
            created_at: a.created_at,
        }
    }
}

/// Insert DTO for a new account.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Update DTO for the caller's own profile fields.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
}
