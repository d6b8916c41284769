//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, map_sqlx_error};
use serde_json::json;

/// Embedded schema migrations, applied by [`SqliteMappingRepository::initialize`].
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// SQLite repository for domain-redirect mappings.
///
/// Every operation is a single statement executed on a pooled connection, so
/// concurrent requests never serialize on a shared handle beyond what SQLite
/// itself requires. The upsert relies on SQLite's native
/// `ON CONFLICT .. DO UPDATE` conditional write.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn initialize(&self) -> Result<(), AppError> {
        MIGRATOR.run(self.pool.as_ref()).await.map_err(|e| {
            AppError::internal(
                "Failed to initialize database schema",
                json!({ "reason": e.to_string() }),
            )
        })
    }

    async fn get(&self, domain: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, (String, Option<String>)>(
            "SELECT domain, redirect FROM mappings WHERE domain = ?",
        )
        .bind(domain)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|(domain, redirect)| Mapping::new(domain, redirect)))
    }

    async fn upsert<'a>(&self, domain: &str, redirect: Option<&'a str>) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO mappings (domain, redirect)
            VALUES (?, ?)
            ON CONFLICT(domain) DO UPDATE SET redirect = excluded.redirect
            "#,
        )
        .bind(domain)
        .bind(redirect)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, domain: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM mappings WHERE domain = ?")
            .bind(domain)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Mapping>, AppError> {
        let rows = sqlx::query_as::<_, (String, Option<String>)>(
            "SELECT domain, redirect FROM mappings ORDER BY domain",
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|(domain, redirect)| Mapping::new(domain, redirect))
            .collect())
    }
}
