//! Database module
//!
//! Owns the embedded SurrealDB handle shared by the repositories.

pub mod models;
pub mod repository;

use repository::{RepoError, RepoResult};
use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::Surreal;

/// Database settings, overridable via environment variables:
///
/// | Variable | Default |
/// |----------|---------|
/// | HR_DATA_DIR | /var/lib/hr/records |
/// | HR_DB_NAMESPACE | hr |
/// | HR_DB_NAME | records |
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// On-disk directory for the RocksDB-backed store
    pub path: String,
    pub namespace: String,
    pub database: String,
}

impl DbConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            path: std::env::var("HR_DATA_DIR").unwrap_or_else(|_| "/var/lib/hr/records".into()),
            namespace: std::env::var("HR_DB_NAMESPACE").unwrap_or_else(|_| "hr".into()),
            database: std::env::var("HR_DB_NAME").unwrap_or_else(|_| "records".into()),
        }
    }
}

/// Database service — owns the embedded database connection
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database and select namespace/database.
    pub async fn new(config: &DbConfig) -> RepoResult<Self> {
        let db = Surreal::new::<RocksDb>(config.path.as_str())
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;
        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            path = %config.path,
            namespace = %config.namespace,
            database = %config.database,
            "database connection established"
        );

        Ok(Self { db })
    }
}
