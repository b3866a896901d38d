//! Repository for the `accounts` table.

use sqlx::PgPool;

use logoforge_core::types::DbId;

use crate::models::account::{Account, AccountInfo, CreateAccount, UpdateProfile};

/// Column list for full `accounts` rows (includes the password hash; keep
/// results server-side).
const ACCOUNT_COLUMNS: &str = "\
    id, email, password_hash, role, status, \
    display_name, bio, avatar_url, banner_url, created_at";

/// Column list for the client-safe projection.
const INFO_COLUMNS: &str = "\
    id, email, role, status, \
    display_name, bio, avatar_url, banner_url, created_at";

/// Provides CRUD operations for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (email, password_hash, role) \
             VALUES ($1, $2, $3) \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find an account by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by email (sign-in path).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all accounts (admin view), oldest first.
    pub async fn list_all(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AccountInfo>, sqlx::Error> {
        let query = format!(
            "SELECT {INFO_COLUMNS} FROM accounts \
             ORDER BY id \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, AccountInfo>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all accounts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Set an account's role. Returns the updated row, or None if missing.
    pub async fn set_role(
        pool: &PgPool,
        id: DbId,
        role: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!(
            "UPDATE accounts SET role = $2 WHERE id = $1 RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .bind(role)
            .fetch_optional(pool)
            .await
    }

    /// Set an account's status (active/blocked).
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!(
            "UPDATE accounts SET status = $2 WHERE id = $1 RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Update the caller's own profile fields.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!(
            "UPDATE accounts SET \
                display_name = COALESCE($2, display_name), \
                bio = COALESCE($3, bio), \
                avatar_url = COALESCE($4, avatar_url), \
                banner_url = COALESCE($5, banner_url) \
             WHERE id = $1 \
             RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .bind(input.display_name.as_deref())
            .bind(input.bio.as_deref())
            .bind(input.avatar_url.as_deref())
            .bind(input.banner_url.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Replace the password hash.
    pub async fn set_password_hash(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE accounts SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an account and everything hanging off it in one transaction:
    /// the download ledger goes away, owned assets are orphaned (owner set
    /// NULL) rather than removed. Returns true if the account existed.
    pub async fn delete_cascading(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM download_history WHERE account_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE assets SET owner_id = NULL WHERE owner_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
