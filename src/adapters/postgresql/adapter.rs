//! PostgreSQL adapter implementing the store traits
//!
//! Maps the store traits onto the host platform's tables: the per-plugin
//! configuration table, the files-metadata table, and the export queues.

use crate::adapters::postgresql::client::PostgresClient;
use crate::adapters::store::traits::{ConfigStore, RecordStore, SchemaInspector};
use crate::domain::ids::AttemptId;
use crate::domain::job::{ExportJob, JobStatus};
use crate::domain::{Result, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio_postgres::Row;

/// PostgreSQL implementation of the store traits
pub struct PostgresAdapter {
    client: Arc<PostgresClient>,
}

impl PostgresAdapter {
    /// Create a new adapter
    pub fn new(client: PostgresClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Create a new adapter sharing an existing client
    pub fn new_with_arc(client: Arc<PostgresClient>) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgresClient> {
        &self.client
    }
}

fn row_to_job(row: &Row) -> Result<ExportJob> {
    let status_raw: String = row.get("status");
    let status: JobStatus = status_raw.parse().map_err(StoreError::Serialization)?;
    let attempt_id =
        AttemptId::new(row.get::<_, i64>("attemptid")).map_err(StoreError::Serialization)?;

    Ok(ExportJob {
        id: Some(row.get::<_, i64>("id")),
        attempt_id,
        user_id: row.get::<_, i64>("userid"),
        status,
        payload: row.get::<_, serde_json::Value>("payload"),
        created_at: row.get::<_, DateTime<Utc>>("timecreated"),
    })
}

#[async_trait]
impl ConfigStore for PostgresAdapter {
    async fn get(&self, component: &str, name: &str) -> Result<Option<String>> {
        let row = self
            .client
            .query_opt(
                "SELECT value FROM folio_config WHERE component = $1 AND name = $2",
                &[&component, &name],
            )
            .await?;

        Ok(row.map(|r| r.get::<_, String>(0)))
    }

    async fn set(&self, component: &str, name: &str, value: &str) -> Result<()> {
        self.client
            .execute(
                "INSERT INTO folio_config (component, name, value) \
                 VALUES ($1, $2, $3) \
                 ON CONFLICT (component, name) DO UPDATE SET value = EXCLUDED.value",
                &[&component, &name, &value],
            )
            .await?;

        Ok(())
    }
}

#[async_trait]
impl SchemaInspector for PostgresAdapter {
    async fn table_exists(&self, table: &str) -> Result<bool> {
        let row = self
            .client
            .query_one(
                "SELECT EXISTS ( \
                     SELECT 1 FROM information_schema.tables \
                     WHERE table_schema = current_schema() AND table_name = $1 \
                 )",
                &[&table],
            )
            .await?;

        Ok(row.get::<_, bool>(0))
    }
}

#[async_trait]
impl RecordStore for PostgresAdapter {
    async fn reassign_file_component(&self, from: &str, to: &str) -> Result<u64> {
        self.client
            .execute(
                "UPDATE files SET component = $1 WHERE component = $2",
                &[&to, &from],
            )
            .await
    }

    async fn jobs_with_status(&self, table: &str, status: JobStatus) -> Result<Vec<ExportJob>> {
        let query = format!(
            "SELECT id, attemptid, userid, status, payload, timecreated \
             FROM {table} WHERE status = $1"
        );
        let rows = self.client.query(&query, &[&status.as_str()]).await?;

        rows.iter().map(row_to_job).collect()
    }

    async fn insert_job(&self, table: &str, job: &ExportJob) -> Result<i64> {
        let statement = format!(
            "INSERT INTO {table} (attemptid, userid, status, payload, timecreated) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id"
        );

        let attempt_id = job.attempt_id.as_i64();
        let status = job.status.as_str();
        let row = self
            .client
            .query_one(
                &statement,
                &[
                    &attempt_id,
                    &job.user_id,
                    &status,
                    &job.payload,
                    &job.created_at,
                ],
            )
            .await?;

        Ok(row.get::<_, i64>(0))
    }
}
