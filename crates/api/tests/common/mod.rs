//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) on top of the per-test database that `#[sqlx::test]`
//! provides, plus small request helpers around `tower::ServiceExt::oneshot`.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use logoforge_api::auth::jwt::JwtConfig;
use logoforge_api::config::{ServerConfig, StorageConfig};
use logoforge_api::router::build_app_router;
use logoforge_api::state::AppState;
use logoforge_api::storage::LocalObjectStore;

/// Build a test `ServerConfig` with safe defaults: a fixed JWT secret,
/// `http://localhost:5173` as CORS origin (matching the dev default), and
/// a per-run blob storage root under the system temp directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 60,
        },
        storage: StorageConfig {
            root: std::env::temp_dir().join(format!("logoforge-test-{}", uuid::Uuid::new_v4())),
            public_base_url: "http://localhost:3000/files".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors `main.rs` exactly via [`build_app_router`]
/// so tests exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let store = Arc::new(LocalObjectStore::new(&config.storage));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST with no body (approve, view increment, and similar endpoints).
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_empty_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

pub const MULTIPART_BOUNDARY: &str = "logoforge-test-boundary";

/// One part of a hand-built multipart form.
pub enum Part<'a> {
    Text { name: &'a str, value: &'a str },
    File { name: &'a str, filename: &'a str, bytes: &'a [u8] },
}

/// Encode parts into a `multipart/form-data` body.
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    token: &str,
    parts: &[Part<'_>],
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .header(
                "content-type",
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create an account directly in the database and return (account, token).
pub async fn create_account(
    pool: &PgPool,
    email: &str,
    role: &str,
) -> (logoforge_db::models::account::Account, String) {
    let hashed = logoforge_api::auth::password::hash_password("test_password_123!")
        .expect("hashing should succeed");

    let account = logoforge_db::repositories::AccountRepo::create(
        pool,
        &logoforge_db::models::account::CreateAccount {
            email: email.to_string(),
            password_hash: hashed,
            role: role.to_string(),
        },
    )
    .await
    .expect("account creation should succeed");

    let token = logoforge_api::auth::jwt::generate_access_token(
        account.id,
        &account.role,
        &test_config().jwt,
    )
    .expect("token generation should succeed");

    (account, token)
}

/// Insert an asset directly in the database with the given status.
pub async fn create_asset(
    pool: &PgPool,
    title: &str,
    status: &str,
    owner_id: Option<i64>,
) -> logoforge_db::models::asset::Asset {
    logoforge_db::repositories::AssetRepo::create(
        pool,
        &logoforge_db::models::asset::CreateAsset {
            title: title.to_string(),
            description: Some("test asset".to_string()),
            category: Some("gaming".to_string()),
            image_url: "http://localhost:3000/files/test.png".to_string(),
            project_file_url: Some("http://localhost:3000/files/test.plp".to_string()),
            vector_data_url: Some("http://localhost:3000/files/test.xml".to_string()),
            youtube_url: None,
            ai_prompt: None,
            owner_id,
            status: status.to_string(),
        },
    )
    .await
    .expect("asset creation should succeed")
}

/// Save the monetization shortlink setting (enables the token gate when
/// longer than five characters).
pub async fn set_shortlink(pool: &PgPool, value: &str) {
    logoforge_db::repositories::SettingsRepo::upsert_many(
        pool,
        &[logoforge_db::models::setting::SettingEntry {
            key: "shortlink_url".to_string(),
            value: value.to_string(),
        }],
    )
    .await
    .expect("settings upsert should succeed");
}
