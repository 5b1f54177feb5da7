//! HTTP-level tests for `POST /api/v1/submit-story`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, post_json, FakeRelay, TestServices};
use companion_core::language::Language;
use sqlx::PgPool;

fn with_relay(relay: &Arc<FakeRelay>) -> TestServices {
    TestServices {
        story_relay: Some(Arc::clone(relay)),
        ..TestServices::default()
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submission_is_relayed_once(pool: PgPool) {
    let relay = Arc::new(FakeRelay::default());
    let app = common::build_test_app_with(pool, &with_relay(&relay));

    let response = post_json(
        app,
        "/api/v1/submit-story",
        serde_json::json!({ "message": "  Oggi ho visto il mare  ", "language": "it" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Story submitted successfully");

    let seen = relay.submissions.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].message, "Oggi ho visto il mare");
    assert_eq!(seen[0].language, Language::It);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn language_defaults_to_english(pool: PgPool) {
    let relay = Arc::new(FakeRelay::default());
    let app = common::build_test_app_with(pool, &with_relay(&relay));

    post_json(
        app,
        "/api/v1/submit-story",
        serde_json::json!({ "message": "I saw the sea" }),
    )
    .await;

    assert_eq!(relay.submissions.lock().unwrap()[0].language, Language::En);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn whitespace_message_returns_400(pool: PgPool) {
    let relay = Arc::new(FakeRelay::default());
    let app = common::build_test_app_with(pool, &with_relay(&relay));

    let response = post_json(
        app,
        "/api/v1/submit-story",
        serde_json::json!({ "message": " \n\t " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Story content is required");
    assert!(relay.submissions.lock().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn relay_failure_is_not_retried(pool: PgPool) {
    let relay = Arc::new(FakeRelay {
        fail: true,
        ..FakeRelay::default()
    });
    let app = common::build_test_app_with(pool, &with_relay(&relay));

    let response = post_json(
        app,
        "/api/v1/submit-story",
        serde_json::json!({ "message": "Hello" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "SUBMISSION_FAILED");
    assert_eq!(relay.submissions.lock().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unconfigured_relay_returns_500(pool: PgPool) {
    let app = common::build_test_app_with(pool, &TestServices::unconfigured());

    let response = post_json(
        app,
        "/api/v1/submit-story",
        serde_json::json!({ "message": "Hello" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "NOT_CONFIGURED");
}
