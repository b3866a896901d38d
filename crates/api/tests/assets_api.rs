//! HTTP-level integration tests for the public catalogue, submissions, and
//! the admin direct-publish path.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_account, create_asset, get, get_auth, post_multipart_auth, Part,
};
use sqlx::PgPool;

use logoforge_core::moderation::{STATUS_APPROVED, STATUS_PENDING, STATUS_REJECTED};
use logoforge_core::roles::{ROLE_ADMIN, ROLE_USER};
use logoforge_db::repositories::AssetRepo;

/// The public listing carries approved assets only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_list_filters_unapproved(pool: PgPool) {
    create_asset(&pool, "Live", STATUS_APPROVED, None).await;
    create_asset(&pool, "Queued", STATUS_PENDING, None).await;
    create_asset(&pool, "Refused", STATUS_REJECTED, None).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Live");
}

/// Category and search filters narrow the listing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters(pool: PgPool) {
    let dragon = create_asset(&pool, "Red Dragon", STATUS_APPROVED, None).await;
    create_asset(&pool, "Blue Wolf", STATUS_APPROVED, None).await;
    AssetRepo::update(
        &pool,
        dragon.id,
        &logoforge_db::models::asset::UpdateAsset {
            title: None,
            description: None,
            category: Some("contest-june".to_string()),
            vector_data_url: None,
            youtube_url: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/assets?category=contest-june").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Red Dragon");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/assets?search=wolf").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Blue Wolf");
}

/// `sort=downloads` orders the leaderboard by the download counter.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_sort_by_downloads(pool: PgPool) {
    let first = create_asset(&pool, "Quiet", STATUS_APPROVED, None).await;
    let second = create_asset(&pool, "Popular", STATUS_APPROVED, None).await;
    for _ in 0..3 {
        AssetRepo::increment_downloads(&pool, second.id).await.unwrap();
    }
    AssetRepo::increment_downloads(&pool, first.id).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/assets?sort=downloads").await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items[0]["title"], "Popular");
    assert_eq!(items[1]["title"], "Quiet");
}

/// Detail visibility: approved for everyone, pending only for owner/admin.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_visibility(pool: PgPool) {
    let (owner, owner_token) = create_account(&pool, "owner@test.com", ROLE_USER).await;
    let (_stranger, stranger_token) = create_account(&pool, "other@test.com", ROLE_USER).await;
    let (_admin, admin_token) = create_account(&pool, "admin@test.com", ROLE_ADMIN).await;
    let asset = create_asset(&pool, "WIP", STATUS_PENDING, Some(owner.id)).await;
    let uri = format!("/api/v1/assets/{}", asset.id);

    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, &uri).await.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get_auth(app, &uri, &stranger_token).await.status(),
        StatusCode::NOT_FOUND
    );

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get_auth(app, &uri, &owner_token).await.status(),
        StatusCode::OK
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        get_auth(app, &uri, &admin_token).await.status(),
        StatusCode::OK
    );
}

/// The detail view joins the uploader's public profile.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_includes_uploader(pool: PgPool) {
    let (owner, _token) = create_account(&pool, "owner@test.com", ROLE_USER).await;
    let asset = create_asset(&pool, "Signed Work", STATUS_APPROVED, Some(owner.id)).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/assets/{}", asset.id)).await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["uploader_email"], "owner@test.com");
}

/// A complete multipart submission lands pending with all variants stored.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_self_service_submission(pool: PgPool) {
    let (account, token) = create_account(&pool, "artist@test.com", ROLE_USER).await;
    let app = common::build_test_app(pool.clone());

    let parts = [
        Part::Text { name: "title", value: "My Dragon" },
        Part::Text { name: "category", value: "gaming" },
        Part::Text { name: "description", value: "fierce" },
        Part::File { name: "image", filename: "dragon preview.png", bytes: b"png-bytes" },
        Part::File { name: "project_file", filename: "dragon.plp", bytes: b"plp-bytes" },
    ];
    let response = post_multipart_auth(app, "/api/v1/assets", &token, &parts).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["title"], "My Dragon");
    assert_eq!(json["data"]["owner_id"], account.id);

    let image_url = json["data"]["image_url"].as_str().unwrap();
    assert!(
        image_url.contains(&format!("uploads/{}/", account.id)),
        "self-service uploads are namespaced per account: {image_url}"
    );
    assert!(image_url.ends_with("dragonpreview.png"), "{image_url}");
    assert!(json["data"]["project_file_url"].is_string());
    assert!(json["data"]["vector_data_url"].is_null());
}

/// Submissions without the mandatory pieces are refused.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submission_validation(pool: PgPool) {
    let (_account, token) = create_account(&pool, "artist@test.com", ROLE_USER).await;

    // Missing image.
    let app = common::build_test_app(pool.clone());
    let parts = [
        Part::Text { name: "title", value: "No Image" },
        Part::Text { name: "category", value: "gaming" },
    ];
    let response = post_multipart_auth(app, "/api/v1/assets", &token, &parts).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing title.
    let app = common::build_test_app(pool.clone());
    let parts = [
        Part::Text { name: "category", value: "gaming" },
        Part::File { name: "image", filename: "x.png", bytes: b"png" },
    ];
    let response = post_multipart_auth(app, "/api/v1/assets", &token, &parts).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing category.
    let app = common::build_test_app(pool);
    let parts = [
        Part::Text { name: "title", value: "No Category" },
        Part::File { name: "image", filename: "x.png", bytes: b"png" },
    ];
    let response = post_multipart_auth(app, "/api/v1/assets", &token, &parts).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Admin direct publish skips moderation entirely and carries no owner.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_direct_publish(pool: PgPool) {
    let (_admin, token) = create_account(&pool, "admin@test.com", ROLE_ADMIN).await;
    let app = common::build_test_app(pool.clone());

    // Bare upload: no title or category required on this path.
    let parts = [Part::File { name: "image", filename: "seed.png", bytes: b"png-bytes" }];
    let response = post_multipart_auth(app, "/api/v1/admin/assets", &token, &parts).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "approved");
    assert!(json["data"]["owner_id"].is_null());

    // Immediately visible publicly.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/assets").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// `/me/assets` returns the caller's own submissions regardless of status.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_my_assets(pool: PgPool) {
    let (owner, token) = create_account(&pool, "artist@test.com", ROLE_USER).await;
    create_asset(&pool, "Mine Pending", STATUS_PENDING, Some(owner.id)).await;
    create_asset(&pool, "Mine Rejected", STATUS_REJECTED, Some(owner.id)).await;
    create_asset(&pool, "Someone Elses", STATUS_APPROVED, None).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/me/assets", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// Submitting without a token is a 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submission_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_empty(app, "/api/v1/assets").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
