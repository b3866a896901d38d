//! Persistence layer for the LogoForge backend.
//!
//! Owns the PostgreSQL connection pool, embedded migrations, row models
//! (`models`), and the repository structs (`repositories`) the API layer
//! calls. All counter updates are expressed as SQL-level atomic increments;
//! no repository ever reads a counter, adds one, and writes it back.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared connection pool type used across the workspace.
pub type DbPool = PgPool;

/// Default maximum number of pooled connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a connection pool against `database_url`.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
