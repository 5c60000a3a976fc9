//! In-memory store implementation
//!
//! Implements all three store traits over mutex-guarded maps. This is the
//! substitutable fake used by the integration tests; it also keeps a write
//! counter and a handful of seeding/inspection helpers so tests can assert
//! on side effects without reaching into the internals.

use crate::adapters::store::traits::{ConfigStore, RecordStore, SchemaInspector};
use crate::domain::job::{ExportJob, JobStatus};
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

/// A files-metadata record as the host platform stores it
///
/// Only the fields folio touches; the real table carries many more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Record identifier
    pub id: i64,

    /// Owning component
    pub component: String,

    /// Stored file name
    pub filename: String,
}

/// In-memory implementation of the store traits
#[derive(Default)]
pub struct MemoryStore {
    config: Mutex<HashMap<(String, String), String>>,
    tables: Mutex<HashSet<String>>,
    files: Mutex<Vec<FileRecord>>,
    queues: Mutex<HashMap<String, Vec<ExportJob>>>,
    next_id: AtomicI64,
    config_writes: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Registers a table as existing
    pub fn create_table(&self, name: &str) {
        self.tables.lock().unwrap().insert(name.to_string());
    }

    /// Seeds a configuration value without counting it as a write
    pub fn seed_config(&self, component: &str, name: &str, value: &str) {
        self.config
            .lock()
            .unwrap()
            .insert((component.to_string(), name.to_string()), value.to_string());
    }

    /// Reads a configuration value synchronously (test inspection)
    pub fn config_value(&self, component: &str, name: &str) -> Option<String> {
        self.config
            .lock()
            .unwrap()
            .get(&(component.to_string(), name.to_string()))
            .cloned()
    }

    /// Number of writes made through [`ConfigStore::set`]
    pub fn config_write_count(&self) -> usize {
        self.config_writes.load(Ordering::SeqCst)
    }

    /// Adds a files-metadata record owned by `component`
    pub fn add_file(&self, component: &str, filename: &str) -> i64 {
        let id = self.assign_id();
        self.files.lock().unwrap().push(FileRecord {
            id,
            component: component.to_string(),
            filename: filename.to_string(),
        });
        id
    }

    /// Snapshot of all files-metadata records
    pub fn files(&self) -> Vec<FileRecord> {
        self.files.lock().unwrap().clone()
    }

    /// Appends a record to a queue, assigning an identifier
    ///
    /// Also registers the queue table as existing.
    pub fn push_job(&self, table: &str, job: ExportJob) -> i64 {
        self.create_table(table);
        let id = self.assign_id();
        self.queues
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(ExportJob {
                id: Some(id),
                ..job
            });
        id
    }

    /// Snapshot of a queue's records
    pub fn jobs_in(&self, table: &str) -> Vec<ExportJob> {
        self.queues
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn get(&self, component: &str, name: &str) -> Result<Option<String>> {
        Ok(self.config_value(component, name))
    }

    async fn set(&self, component: &str, name: &str, value: &str) -> Result<()> {
        self.config
            .lock()
            .unwrap()
            .insert((component.to_string(), name.to_string()), value.to_string());
        self.config_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl SchemaInspector for MemoryStore {
    async fn table_exists(&self, table: &str) -> Result<bool> {
        Ok(self.tables.lock().unwrap().contains(table))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn reassign_file_component(&self, from: &str, to: &str) -> Result<u64> {
        let mut files = self.files.lock().unwrap();
        let mut updated = 0;
        for record in files.iter_mut() {
            if record.component == from {
                record.component = to.to_string();
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn jobs_with_status(&self, table: &str, status: JobStatus) -> Result<Vec<ExportJob>> {
        Ok(self
            .jobs_in(table)
            .into_iter()
            .filter(|job| job.status == status)
            .collect())
    }

    async fn insert_job(&self, table: &str, job: &ExportJob) -> Result<i64> {
        let id = self.assign_id();
        self.queues
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(ExportJob {
                id: Some(id),
                ..job.clone()
            });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AttemptId;
    use chrono::Utc;

    fn job(status: JobStatus) -> ExportJob {
        ExportJob {
            id: None,
            attempt_id: AttemptId::new(1).unwrap(),
            user_id: 2,
            status,
            payload: serde_json::json!({}),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_config_roundtrip_and_write_count() {
        let store = MemoryStore::new();
        store.seed_config("folio", "mathjaxdelay", "3");
        assert_eq!(store.config_write_count(), 0);

        assert_eq!(
            store.get("folio", "mathjaxdelay").await.unwrap(),
            Some("3".to_string())
        );
        assert_eq!(store.get("folio", "missing").await.unwrap(), None);

        store.set("folio", "catfilter", "1,2").await.unwrap();
        assert_eq!(store.config_write_count(), 1);
        assert_eq!(store.config_value("folio", "catfilter").unwrap(), "1,2");
    }

    #[tokio::test]
    async fn test_table_existence() {
        let store = MemoryStore::new();
        assert!(!store.table_exists("folio_queue_hsnr").await.unwrap());
        store.create_table("folio_queue_hsnr");
        assert!(store.table_exists("folio_queue_hsnr").await.unwrap());
    }

    #[tokio::test]
    async fn test_reassign_touches_only_matching_files() {
        let store = MemoryStore::new();
        store.add_file("folio_hsnr", "a.pdf");
        store.add_file("folio_hsnr", "b.pdf");
        store.add_file("assignsubmission_file", "c.txt");

        let updated = store
            .reassign_file_component("folio_hsnr", "folio")
            .await
            .unwrap();
        assert_eq!(updated, 2);

        let files = store.files();
        assert_eq!(
            files.iter().filter(|f| f.component == "folio").count(),
            2
        );
        assert_eq!(
            files
                .iter()
                .filter(|f| f.component == "assignsubmission_file")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_job_insert_assigns_fresh_ids() {
        let store = MemoryStore::new();
        let stale = ExportJob {
            id: Some(999),
            ..job(JobStatus::Waiting)
        };

        let id = store.insert_job("folio_queue", &stale).await.unwrap();
        let stored = store.jobs_in("folio_queue");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, Some(id));
        assert_ne!(stored[0].id, Some(999));
    }

    #[tokio::test]
    async fn test_jobs_with_status_filters() {
        let store = MemoryStore::new();
        store.push_job("q", job(JobStatus::Waiting));
        store.push_job("q", job(JobStatus::Complete));
        store.push_job("q", job(JobStatus::Waiting));

        let waiting = store.jobs_with_status("q", JobStatus::Waiting).await.unwrap();
        assert_eq!(waiting.len(), 2);
        let failed = store.jobs_with_status("q", JobStatus::Failed).await.unwrap();
        assert!(failed.is_empty());
    }
}
