//! Integration tests for uploads and exports through the media service.

mod common;

use axum::http::StatusCode;
use brandkit_media::UploadOptions;
use common::{body_json, build_app_with, post_file, post_json, FakeGenerator, FakeMedia};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_logo_removes_background(pool: PgPool) {
    let app = build_app_with(pool, FakeMedia::default(), FakeGenerator::answering("{}"));

    let response = post_file(app.router, "/upload-logo", "logo_file", "acme.jpg", b"jpegdata").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["url"],
        "https://res.cloudinary.test/image/upload/acme.png"
    );

    let uploads = app.media.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, "bytes:acme.jpg:8");
    assert_eq!(uploads[0].1, UploadOptions::background_removed("acme"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_product_uses_its_own_field(pool: PgPool) {
    let app = build_app_with(pool, FakeMedia::default(), FakeGenerator::answering("{}"));

    let response = post_file(
        app.router.clone(),
        "/upload-product",
        "logo_file",
        "can.png",
        b"png",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "ERROR: Failed to get the product_file"
    );

    let response = post_file(app.router, "/upload-product", "product_file", "can.png", b"png").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.media.uploads().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_upload_is_rejected(pool: PgPool) {
    let app = build_app_with(pool, FakeMedia::default(), FakeGenerator::answering("{}"));
    let data = vec![0u8; common::TEST_MAX_UPLOAD_BYTES + 1];

    let response = post_file(app.router, "/upload-logo", "logo_file", "big.png", &data).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("File too large"));
    assert!(app.media.uploads().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn media_failure_returns_generic_500(pool: PgPool) {
    let app = build_app_with(pool, FakeMedia::failing(), FakeGenerator::answering("{}"));

    let response = post_file(app.router, "/upload-logo", "logo_file", "acme.png", b"png").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["message"],
        "ERROR: Something went wrong"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn export_image_uploads_url_without_transformation(pool: PgPool) {
    let app = build_app_with(pool, FakeMedia::default(), FakeGenerator::answering("{}"));

    let response = post_json(
        app.router,
        "/export-image",
        json!({"url": "https://x/render.png"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["url"].as_str().unwrap().starts_with("https://"));

    let uploads = app.media.uploads();
    assert_eq!(uploads[0].0, "url:https://x/render.png");
    assert_eq!(uploads[0].1, UploadOptions::plain());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn export_without_url_is_rejected(pool: PgPool) {
    let app = build_app_with(pool, FakeMedia::default(), FakeGenerator::answering("{}"));

    let response = post_json(app.router, "/export-image", json!({"url": " "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.media.uploads().is_empty());
}
