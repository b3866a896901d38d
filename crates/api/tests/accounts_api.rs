//! HTTP-level integration tests for profile self-service and admin account
//! management.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_account, create_asset, delete_auth, get, get_auth, put_json_auth,
};
use sqlx::PgPool;

use logoforge_core::moderation::STATUS_APPROVED;
use logoforge_core::roles::{ROLE_ADMIN, ROLE_USER};
use logoforge_db::repositories::{AccountRepo, AssetRepo, DownloadRepo};

/// `/me` returns the caller's safe projection.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me(pool: PgPool) {
    let (account, token) = create_account(&pool, "me@test.com", ROLE_USER).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], account.id);
    assert_eq!(json["data"]["email"], "me@test.com");
    assert!(json["data"]["password_hash"].is_null());
}

/// Profile updates only touch the provided fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_profile(pool: PgPool) {
    let (_account, token) = create_account(&pool, "me@test.com", ROLE_USER).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "display_name": "Dragon Artist", "bio": "I draw dragons" });
    let response = put_json_auth(app, "/api/v1/me", &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "avatar_url": "http://cdn.example/me.png" });
    let response = put_json_auth(app, "/api/v1/me", &token, body).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["display_name"], "Dragon Artist");
    assert_eq!(json["data"]["avatar_url"], "http://cdn.example/me.png");
}

/// Admin account listing is admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_accounts_requires_admin(pool: PgPool) {
    let (_admin, admin_token) = create_account(&pool, "admin@test.com", ROLE_ADMIN).await;
    let (_user, user_token) = create_account(&pool, "user@test.com", ROLE_USER).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/accounts", &user_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/admin/accounts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/accounts", &admin_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// The admin detail view bundles profile, uploads, and the ledger.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_detail(pool: PgPool) {
    let (_admin, admin_token) = create_account(&pool, "admin@test.com", ROLE_ADMIN).await;
    let (user, _token) = create_account(&pool, "user@test.com", ROLE_USER).await;
    let asset = create_asset(&pool, "Theirs", STATUS_APPROVED, Some(user.id)).await;
    DownloadRepo::append(&pool, user.id, asset.id).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/admin/accounts/{}", user.id),
        &admin_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["account"]["email"], "user@test.com");
    assert_eq!(json["data"]["uploads"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["downloads"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["downloads"][0]["asset_title"], "Theirs");
}

/// Role changes validate the role name.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_set_role(pool: PgPool) {
    let (_admin, admin_token) = create_account(&pool, "admin@test.com", ROLE_ADMIN).await;
    let (user, _token) = create_account(&pool, "user@test.com", ROLE_USER).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/accounts/{}/role", user.id),
        &admin_token,
        serde_json::json!({ "role": "admin" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "admin");

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/accounts/{}/role", user.id),
        &admin_token,
        serde_json::json!({ "role": "superuser" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Blocking takes effect at the next login attempt.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_block_account(pool: PgPool) {
    let (_admin, admin_token) = create_account(&pool, "admin@test.com", ROLE_ADMIN).await;
    let (user, _token) = create_account(&pool, "user@test.com", ROLE_USER).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/accounts/{}/status", user.id),
        &admin_token,
        serde_json::json!({ "status": "blocked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "user@test.com", "password": "test_password_123!" });
    let response = common::post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Deleting an account clears its ledger and orphans its assets, in one
/// transaction.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_account_cascades(pool: PgPool) {
    let (_admin, admin_token) = create_account(&pool, "admin@test.com", ROLE_ADMIN).await;
    let (user, _token) = create_account(&pool, "user@test.com", ROLE_USER).await;
    let asset = create_asset(&pool, "Orphan Me", STATUS_APPROVED, Some(user.id)).await;
    DownloadRepo::append(&pool, user.id, asset.id).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/admin/accounts/{}", user.id),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(AccountRepo::find_by_id(&pool, user.id).await.unwrap().is_none());
    assert_eq!(DownloadRepo::count_by_asset(&pool, asset.id).await.unwrap(), 0);

    let orphan = AssetRepo::find_by_id(&pool, asset.id).await.unwrap().unwrap();
    assert_eq!(orphan.owner_id, None, "assets outlive their uploader");
}

/// Admins cannot delete themselves.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_cannot_self_delete(pool: PgPool) {
    let (admin, admin_token) = create_account(&pool, "admin@test.com", ROLE_ADMIN).await;
    let app = common::build_test_app(pool);

    let response = delete_auth(
        app,
        &format!("/api/v1/admin/accounts/{}", admin.id),
        &admin_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
