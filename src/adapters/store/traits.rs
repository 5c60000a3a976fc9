//! Host-collaborator abstraction traits
//!
//! The host platform owns the plugin configuration store, the database
//! schema, the files-metadata table, and the export queue. These traits are
//! the seams folio talks to them through; every component takes them as
//! explicit `Arc<dyn …>` parameters so tests can substitute in-memory fakes.

use crate::domain::job::{ExportJob, JobStatus};
use crate::domain::Result;
use async_trait::async_trait;

/// Per-component key/value configuration store
///
/// Each plugin owns a namespace (its component name) of string keys and
/// string values. Values are stored raw; normalization happens on read.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read a configuration value
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` when the key has never been set.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn get(&self, component: &str, name: &str) -> Result<Option<String>>;

    /// Write a configuration value, creating or replacing the key
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn set(&self, component: &str, name: &str, value: &str) -> Result<()>;
}

/// Schema introspection capability
#[async_trait]
pub trait SchemaInspector: Send + Sync {
    /// Check whether a table with the given name exists
    ///
    /// # Errors
    ///
    /// Returns an error if introspection itself fails; a missing table is
    /// `Ok(false)`, not an error.
    async fn table_exists(&self, table: &str) -> Result<bool>;
}

/// Record-level access to the files-metadata table and the export queues
///
/// Queue operations take the table name explicitly because the migrator
/// reads from the legacy installation's queue and writes to the current
/// one; both live behind the same store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Re-own every files-metadata record from one component to another
    ///
    /// Must be a single set-based update, not a per-record loop: a partial
    /// application would leave the installation with mixed file ownership.
    ///
    /// # Returns
    ///
    /// Returns the number of records updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    async fn reassign_file_component(&self, from: &str, to: &str) -> Result<u64>;

    /// Read every queue record with the given status
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    async fn jobs_with_status(&self, table: &str, status: JobStatus) -> Result<Vec<ExportJob>>;

    /// Insert a queue record, letting the store assign the identifier
    ///
    /// Any identifier present on `job` is ignored.
    ///
    /// # Returns
    ///
    /// Returns the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    async fn insert_job(&self, table: &str, job: &ExportJob) -> Result<i64>;
}
