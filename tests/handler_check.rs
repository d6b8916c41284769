mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use domain_redirector::api::handlers::check_handler;
use serde_json::json;
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/check", post(check_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_check_returns_configured_redirect(pool: SqlitePool) {
    let server = make_server(pool.clone());

    common::insert_mapping(&pool, "instagram.com", Some("https://my-private/instagram")).await;

    let response = server
        .post("/check")
        .json(&json!({ "domain": "instagram.com" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "redirect": "https://my-private/instagram" }));
}

#[sqlx::test]
async fn test_check_miss_returns_explicit_null(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server
        .post("/check")
        .json(&json!({ "domain": "never-registered.com" }))
        .await;

    response.assert_status_ok();

    // The field must be present and null, not omitted.
    let body = response.json::<serde_json::Value>();
    assert!(body.as_object().unwrap().contains_key("redirect"));
    assert!(body["redirect"].is_null());
}

#[sqlx::test]
async fn test_check_null_redirect_row_answers_null(pool: SqlitePool) {
    let server = make_server(pool.clone());

    common::insert_mapping(&pool, "a.com", None).await;

    let response = server.post("/check").json(&json!({ "domain": "a.com" })).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "redirect": null }));
}

#[sqlx::test]
async fn test_check_normalizes_lookup_key(pool: SqlitePool) {
    let server = make_server(pool.clone());

    common::insert_mapping(&pool, "example.com", Some("https://x")).await;

    let response = server
        .post("/check")
        .json(&json!({ "domain": "HTTP://WWW.Example.com/some/path?q=1" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "redirect": "https://x" }));
}

#[sqlx::test]
async fn test_check_empty_domain_rejected(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.post("/check").json(&json!({ "domain": "   " })).await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}
