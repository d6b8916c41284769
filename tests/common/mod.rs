#![allow(dead_code)]

use domain_redirector::application::services::MappingService;
use domain_redirector::infrastructure::persistence::SqliteMappingRepository;
use domain_redirector::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with_key(pool, None)
}

pub fn create_test_state_with_key(pool: SqlitePool, api_key: Option<&str>) -> AppState {
    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));
    let mapping_service = Arc::new(MappingService::new(repository));

    AppState {
        mapping_service,
        api_key: api_key.map(str::to_string),
    }
}

pub async fn insert_mapping(pool: &SqlitePool, domain: &str, redirect: Option<&str>) {
    sqlx::query("INSERT INTO mappings (domain, redirect) VALUES (?, ?)")
        .bind(domain)
        .bind(redirect)
        .execute(pool)
        .await
        .unwrap();
}

/// Raw row read bypassing the service, so tests can tell "no row" apart from
/// "row with NULL redirect".
pub async fn fetch_redirect_row(pool: &SqlitePool, domain: &str) -> Option<Option<String>> {
    sqlx::query_scalar::<_, Option<String>>("SELECT redirect FROM mappings WHERE domain = ?")
        .bind(domain)
        .fetch_optional(pool)
        .await
        .unwrap()
}
