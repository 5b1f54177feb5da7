//! HTTP-level tests for the `/api/v1/gallery` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_raw};
use sqlx::PgPool;

async fn add(pool: &PgPool, url: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/gallery", serde_json::json!({ "url": url })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201_with_image(pool: PgPool) {
    let json = add(&pool, "https://res.example/a.jpg").await;

    assert_eq!(json["success"], true);
    assert_eq!(json["image"]["url"], "https://res.example/a.jpg");
    assert!(json["image"]["id"].as_str().unwrap().starts_with("img_"));
    assert!(json["image"]["createdAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    add(&pool, "https://res.example/old.jpg").await;
    let newest = add(&pool, "https://res.example/new.jpg").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/gallery").await).await;

    assert_eq!(json["total"], 2);
    assert_eq!(json["images"][0]["id"], newest["image"]["id"]);
    assert_eq!(json["images"][1]["url"], "https://res.example/old.jpg");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_url_returns_400(pool: PgPool) {
    for body in [serde_json::json!({ "url": "   " }), serde_json::json!({})] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/gallery", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Image URL is required");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_image(pool: PgPool) {
    let created = add(&pool, "https://res.example/gone.jpg").await;
    let id = created["image"]["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/gallery/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Image deleted successfully");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/gallery").await).await;
    assert_eq!(json["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/gallery/img_0_missing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_body_returns_json_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/v1/gallery", r#"{"url": "#, Some("application/json")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_content_type_returns_json_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = r#"{"url":"https://res.example/a.jpg"}"#;
    let response = post_raw(app, "/api/v1/gallery", body, None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
