mod common;

use axum::{Router, middleware, routing::delete};
use axum_test::TestServer;
use domain_redirector::api::handlers::unregister_handler;
use domain_redirector::api::middleware::auth;
use serde_json::json;
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/unregister", delete(unregister_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_unregister_removes_mapping(pool: SqlitePool) {
    let server = make_server(pool.clone());

    common::insert_mapping(&pool, "instagram.com", Some("https://x")).await;

    let response = server
        .delete("/unregister")
        .add_query_param("domain", "instagram.com")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true, "domain": "instagram.com" }));

    assert!(
        common::fetch_redirect_row(&pool, "instagram.com")
            .await
            .is_none()
    );
}

#[sqlx::test]
async fn test_unregister_normalizes_domain(pool: SqlitePool) {
    let server = make_server(pool.clone());

    common::insert_mapping(&pool, "example.com", Some("https://x")).await;

    let response = server
        .delete("/unregister")
        .add_query_param("domain", "https://WWW.Example.com/path")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true, "domain": "example.com" }));
}

#[sqlx::test]
async fn test_unregister_missing_mapping_is_404(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server
        .delete("/unregister")
        .add_query_param("domain", "never-registered.com")
        .await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_unregister_empty_domain_rejected(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server
        .delete("/unregister")
        .add_query_param("domain", "  ")
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_unregister_requires_api_key_when_configured(pool: SqlitePool) {
    let state = common::create_test_state_with_key(pool.clone(), Some("secret-key"));
    let app = Router::new()
        .route("/unregister", delete(unregister_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    common::insert_mapping(&pool, "a.com", Some("https://x")).await;

    server
        .delete("/unregister")
        .add_query_param("domain", "a.com")
        .await
        .assert_status(axum::http::StatusCode::UNAUTHORIZED);

    // Mapping untouched by the rejected request.
    assert!(common::fetch_redirect_row(&pool, "a.com").await.is_some());

    server
        .delete("/unregister")
        .add_query_param("domain", "a.com")
        .add_header("x-api-key", "secret-key")
        .await
        .assert_status_ok();
}
