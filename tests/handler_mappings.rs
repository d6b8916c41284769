mod common;

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use domain_redirector::api::handlers::mappings_handler;
use domain_redirector::api::middleware::auth;
use serde_json::json;
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/mappings", get(mappings_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_mappings_list_ordered_by_domain(pool: SqlitePool) {
    let server = make_server(pool.clone());

    common::insert_mapping(&pool, "b.com", Some("https://b")).await;
    common::insert_mapping(&pool, "a.com", Some("https://a")).await;

    let response = server.get("/mappings").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "mapping": [
            { "domain": "a.com", "redirect": "https://a" },
            { "domain": "b.com", "redirect": "https://b" }
        ]
    }));
}

#[sqlx::test]
async fn test_mappings_list_includes_null_redirects(pool: SqlitePool) {
    let server = make_server(pool.clone());

    common::insert_mapping(&pool, "a.com", None).await;

    let response = server.get("/mappings").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body["mapping"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["domain"], "a.com");
    assert!(items[0]["redirect"].is_null());
}

#[sqlx::test]
async fn test_mappings_empty_table(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.get("/mappings").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "mapping": [] }));
}

#[sqlx::test]
async fn test_mappings_requires_api_key_when_configured(pool: SqlitePool) {
    let state = common::create_test_state_with_key(pool, Some("secret-key"));
    let app = Router::new()
        .route("/mappings", get(mappings_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    server
        .get("/mappings")
        .await
        .assert_status(axum::http::StatusCode::UNAUTHORIZED);

    server
        .get("/mappings")
        .add_header("x-api-key", "secret-key")
        .await
        .assert_status_ok();
}
