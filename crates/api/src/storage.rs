//! Blob storage behind a provider trait.
//!
//! Any collaborator that can store bytes at a path and derive a publicly
//! fetchable URL from that path is interchangeable here. The default
//! implementation writes to local disk under a configured root, served by
//! the router's static file mount.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::StorageConfig;

/// Minimal blob-store operation set the handlers depend on.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` at `path` (relative, forward-slash separated),
    /// overwriting any existing object.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), std::io::Error>;

    /// Derive the publicly fetchable URL for a stored path.
    fn public_url(&self, path: &str) -> String;
}

/// Local-disk implementation of [`ObjectStore`].
pub struct LocalObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.root.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), std::io::Error> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(full, bytes).await
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base_url, path.trim_start_matches('/'))
    }
}

/// Strip everything but ASCII alphanumerics, dots, dashes, and underscores
/// from a client-supplied filename before it becomes part of a storage path.
pub fn sanitize_object_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}
