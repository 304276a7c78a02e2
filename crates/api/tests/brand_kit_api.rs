//! Integration tests for brand kit creation and retrieval.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_raw};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a kit through the API and return its id.
async fn create_kit(pool: &PgPool, body: serde_json::Value) -> String {
    let response = post_json(common::build_test_app(pool.clone()), "/create-brand-kit", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["brand_kit"][0]["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_get_round_trip(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/create-brand-kit",
        json!({
            "name": "Acme",
            "colors_json": {"primary": "#FFF"},
            "image_urls": ["http://x/1.png"]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().starts_with("SUCCESS"));

    let kits = json["data"]["brand_kit"].as_array().unwrap();
    assert_eq!(kits.len(), 1);
    assert_eq!(kits[0]["name"], "Acme");
    assert_eq!(kits[0]["colors_json"], json!({"primary": "#FFF"}));
    assert!(kits[0]["logo_url"].is_null());
    assert!(kits[0]["rules_text"].is_null());
    let kit_id = kits[0]["id"].as_str().unwrap().to_string();

    let response = get(common::build_test_app(pool), &format!("/brand-kit/{kit_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["brand_kit"]["name"], "Acme");
    let images = json["data"]["product_images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["image_url"], "http://x/1.png");
    assert_eq!(images[0]["brand_kit_id"], kit_id.as_str());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn colors_default_to_empty_object(pool: PgPool) {
    let kit_id = create_kit(&pool, json!({"name": "Plain"})).await;

    let json = body_json(get(common::build_test_app(pool), &format!("/brand-kit/{kit_id}")).await).await;

    assert_eq!(json["data"]["brand_kit"]["colors_json"], json!({}));
    assert_eq!(json["data"]["product_images"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_name_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/create-brand-kit",
        json!({"name": "   ", "image_urls": []}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().starts_with("ERROR:"));
    assert!(json["data"].is_null());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM brand_kits")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_image_url_rejects_whole_kit(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/create-brand-kit",
        json!({"name": "Acme", "image_urls": ["http://x/1.png", ""]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("image_urls[1]"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_images")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_body_returns_envelope(pool: PgPool) {
    let response = post_raw(
        common::build_test_app(pool),
        "/create-brand-kit",
        "application/json",
        b"{not json".to_vec(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "ERROR: Unable to parse the request body");
    assert!(json["data"].is_null());
}

// ---------------------------------------------------------------------------
// Get / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_with_malformed_id_returns_400(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/brand-kit/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "ERROR: Invalid kit id");
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_kit_returns_400(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        &format!("/brand-kit/{}", Uuid::now_v7()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "ERROR: No brand kit found with this id");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_created_kits(pool: PgPool) {
    create_kit(&pool, json!({"name": "One"})).await;
    create_kit(&pool, json!({"name": "Two"})).await;

    let response = get(common::build_test_app(pool), "/brand-kits").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let mut names: Vec<_> = json["data"]["brand_kit"]
        .as_array()
        .unwrap()
        .iter()
        .map(|kit| kit["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["One", "Two"]);
}

// ---------------------------------------------------------------------------
// Product images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_product_image_to_existing_kit(pool: PgPool) {
    let kit_id = create_kit(&pool, json!({"name": "Acme"})).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/brand-kit/{kit_id}/product-images"),
        json!({"image_url": "http://x/2.png", "image_name": "Can"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["image_name"], "Can");

    let json = body_json(get(common::build_test_app(pool), &format!("/brand-kit/{kit_id}")).await).await;
    assert_eq!(json["data"]["product_images"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_product_image_to_unknown_kit_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        &format!("/brand-kit/{}/product-images", Uuid::now_v7()),
        json!({"image_url": "http://x/2.png"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
