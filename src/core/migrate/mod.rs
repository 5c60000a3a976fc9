//! Legacy installation migration
//!
//! A one-time procedure, run from the install/upgrade driver, that carries
//! data over from an earlier, differently-branded installation of the same
//! functionality: its settings, its stored files' ownership, and whatever
//! export jobs it had not yet processed.
//!
//! The procedure assumes the exclusive database access the host grants
//! install steps and performs no transaction demarcation of its own. Any
//! failure propagates to the caller and aborts the install step; steps
//! already applied stay applied.

use crate::adapters::store::traits::{ConfigStore, RecordStore, SchemaInspector};
use crate::core::export::settings::keys;
use crate::domain::job::{JobStatus, LEGACY_QUEUE_TABLE, QUEUE_TABLE};
use crate::domain::{Result, COMPONENT, LEGACY_COMPONENT};
use std::sync::Arc;

/// What a migration run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationOutcome {
    /// False when no legacy installation was found and nothing was touched
    pub performed: bool,

    /// Files-metadata records re-owned to the current component
    pub files_reassigned: u64,

    /// Pending export jobs carried over to the current queue
    pub jobs_migrated: usize,
}

/// One-shot migrator for a legacy branded installation
pub struct LegacyMigrator {
    config: Arc<dyn ConfigStore>,
    schema: Arc<dyn SchemaInspector>,
    records: Arc<dyn RecordStore>,
}

impl LegacyMigrator {
    /// Create a migrator over the given store capabilities
    pub fn new(
        config: Arc<dyn ConfigStore>,
        schema: Arc<dyn SchemaInspector>,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            config,
            schema,
            records,
        }
    }

    /// Run the migration
    ///
    /// Safe to call on fresh installs: when the legacy queue table does not
    /// exist there is nothing to migrate and the store is not written at
    /// all.
    ///
    /// # Errors
    ///
    /// Store and schema errors propagate unmodified; there is no rollback.
    pub async fn run(&self) -> Result<MigrationOutcome> {
        if !self.schema.table_exists(LEGACY_QUEUE_TABLE).await? {
            tracing::debug!("No legacy installation found, nothing to migrate");
            return Ok(MigrationOutcome::default());
        }

        tracing::info!(
            legacy_component = LEGACY_COMPONENT,
            "Legacy installation detected, migrating"
        );

        // Stop the old installation from generating further exports now
        // that this one takes over.
        self.config
            .set(LEGACY_COMPONENT, keys::AUTO_EXPORT, "0")
            .await?;

        // Settings copy over verbatim; validation happens on first use, not
        // here. An unset legacy key copies as an empty value.
        for key in [keys::CAT_FILTER, keys::PDF_EXPORT_DIR] {
            let value = self
                .config
                .get(LEGACY_COMPONENT, key)
                .await?
                .unwrap_or_default();
            self.config.set(COMPONENT, key, &value).await?;
        }

        // One set-based update: partial re-owning would leave mixed file
        // ownership behind.
        let files_reassigned = self
            .records
            .reassign_file_component(LEGACY_COMPONENT, COMPONENT)
            .await?;
        tracing::info!(count = files_reassigned, "Re-owned stored export files");

        // Only in-flight work moves. Processed and failed records stay in
        // the legacy queue; the new installation assigns its own ids.
        let waiting = self
            .records
            .jobs_with_status(LEGACY_QUEUE_TABLE, JobStatus::Waiting)
            .await?;
        let mut jobs_migrated = 0;
        for job in &waiting {
            self.records
                .insert_job(QUEUE_TABLE, &job.without_id())
                .await?;
            jobs_migrated += 1;
        }
        tracing::info!(count = jobs_migrated, "Migrated pending export jobs");

        Ok(MigrationOutcome {
            performed: true,
            files_reassigned,
            jobs_migrated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    fn migrator(store: &Arc<MemoryStore>) -> LegacyMigrator {
        LegacyMigrator::new(store.clone(), store.clone(), store.clone())
    }

    #[tokio::test]
    async fn test_fresh_install_is_a_no_op() {
        let store = Arc::new(MemoryStore::new());
        let outcome = migrator(&store).run().await.unwrap();

        assert_eq!(outcome, MigrationOutcome::default());
        assert_eq!(store.config_write_count(), 0);
        assert!(store.jobs_in(QUEUE_TABLE).is_empty());
    }

    #[tokio::test]
    async fn test_legacy_autoexport_is_disabled() {
        let store = Arc::new(MemoryStore::new());
        store.create_table(LEGACY_QUEUE_TABLE);
        store.seed_config(LEGACY_COMPONENT, keys::AUTO_EXPORT, "1");

        let outcome = migrator(&store).run().await.unwrap();

        assert!(outcome.performed);
        assert_eq!(
            store.config_value(LEGACY_COMPONENT, keys::AUTO_EXPORT).unwrap(),
            "0"
        );
    }

    #[tokio::test]
    async fn test_unset_legacy_settings_copy_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.create_table(LEGACY_QUEUE_TABLE);

        migrator(&store).run().await.unwrap();

        assert_eq!(store.config_value(COMPONENT, keys::CAT_FILTER).unwrap(), "");
        assert_eq!(
            store.config_value(COMPONENT, keys::PDF_EXPORT_DIR).unwrap(),
            ""
        );
    }
}
