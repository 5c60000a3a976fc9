//! PostgreSQL client
//!
//! Pooled access to the host platform's database, plus the schema bootstrap
//! for the current installation's own tables.

use crate::config::schema::PostgreSQLConfig;
use crate::config::secret;
use crate::domain::{FolioError, Result, StoreError};
use deadpool_postgres::{Manager, ManagerConfig, Object, Pool, RecyclingMethod, Runtime};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

/// Schema bootstrap for the current installation. The legacy queue table is
/// deliberately absent: its existence is the migration marker and it belongs
/// to the legacy installation.
const SCHEMA_SQL: &str = include_str!("../../../migrations/001_initial_schema.sql");

/// Pooled PostgreSQL client
pub struct PostgresClient {
    pool: Pool,
    statement_timeout: Duration,
    target: String,
}

impl PostgresClient {
    /// Build a pool from the `[postgresql]` configuration section
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Configuration`] for an unparseable connection
    /// string and [`StoreError::Connection`] when the pool cannot be built.
    pub async fn new(config: PostgreSQLConfig) -> Result<Self> {
        let target = secret::redacted(&config.connection_string);
        let pg: tokio_postgres::Config = config
            .connection_string
            .expose_secret()
            .as_str()
            .parse()
            .map_err(|e| {
                FolioError::Configuration(format!("Invalid PostgreSQL connection string: {e}"))
            })?;

        let manager = Manager::from_config(
            pg,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );
        let wait = Duration::from_secs(config.connection_timeout_seconds);
        let pool = Pool::builder(manager)
            .runtime(Runtime::Tokio1)
            .max_size(config.max_connections)
            .create_timeout(Some(wait))
            .wait_timeout(Some(wait))
            .recycle_timeout(Some(wait))
            .build()
            .map_err(|e| StoreError::Connection(format!("Cannot build connection pool: {e}")))?;

        Ok(Self {
            pool,
            statement_timeout: Duration::from_secs(config.statement_timeout_seconds),
            target,
        })
    }

    /// Verify the database is reachable
    pub async fn test_connection(&self) -> Result<()> {
        self.checkout()
            .await?
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| StoreError::Connection(format!("Connection test failed: {e}")))?;
        tracing::debug!(target = %self.target, "Database reachable");
        Ok(())
    }

    /// Create the current installation's tables if they are missing
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Schema`] when the bootstrap SQL fails.
    pub async fn ensure_schema(&self) -> Result<()> {
        self.checkout()
            .await?
            .batch_execute(SCHEMA_SQL)
            .await
            .map_err(|e| StoreError::Schema(format!("Schema bootstrap failed: {e}")))?;
        tracing::info!("Schema bootstrap complete");
        Ok(())
    }

    /// Run a query and collect every row
    pub async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Vec<Row>> {
        self.checkout()
            .await?
            .query(sql, params)
            .await
            .map_err(|e| StoreError::Query(format!("{e}")).into())
    }

    /// Run a query expected to return exactly one row
    pub async fn query_one(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Row> {
        self.checkout()
            .await?
            .query_one(sql, params)
            .await
            .map_err(|e| StoreError::Query(format!("{e}")).into())
    }

    /// Run a query returning at most one row
    pub async fn query_opt(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>> {
        self.checkout()
            .await?
            .query_opt(sql, params)
            .await
            .map_err(|e| StoreError::Query(format!("{e}")).into())
    }

    /// Run a statement and report how many rows it touched
    pub async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64> {
        self.checkout()
            .await?
            .execute(sql, params)
            .await
            .map_err(|e| StoreError::Query(format!("{e}")).into())
    }

    /// Connection target with credentials redacted, for logging
    pub fn target(&self) -> &str {
        &self.target
    }

    // Every statement runs with the configured timeout; a hung host
    // database should fail the CLI call, not wedge it.
    async fn checkout(&self) -> Result<Object> {
        let conn = self
            .pool
            .get()
            .await
            .map_err(|e| StoreError::Connection(format!("Pool checkout failed: {e}")))?;
        conn.batch_execute(&format!(
            "SET statement_timeout = {}",
            self.statement_timeout.as_millis()
        ))
        .await
        .map_err(|e| StoreError::Query(format!("Cannot set statement timeout: {e}")))?;
        Ok(conn)
    }
}
