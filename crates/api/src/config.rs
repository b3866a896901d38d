use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Blob storage configuration.
    pub storage: StorageConfig,
}

/// Where uploaded blobs land on disk and how their public URLs are derived.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory uploaded files are written under.
    pub root: PathBuf,
    /// Base URL prepended to stored paths to form fetchable URLs.
    pub public_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `3000`                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `STORAGE_ROOT`         | `./data/uploads`            |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000/files` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage = StorageConfig {
            root: std::env::var("STORAGE_ROOT")
                .unwrap_or_else(|_| "./data/uploads".into())
                .into(),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/files".into()),
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            storage,
        }
    }
}
