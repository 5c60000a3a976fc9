//! Migrate command implementation
//!
//! Runs the one-time migration from a legacy branded installation. Intended
//! to be invoked by the install/upgrade driver; any failure aborts with a
//! fatal exit code so the install step fails visibly.

use crate::adapters::postgresql::{PostgresAdapter, PostgresClient};
use crate::config::load_config;
use crate::core::migrate::LegacyMigrator;
use clap::Args;
use std::sync::Arc;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Skip bootstrapping the current installation's schema first
    #[arg(long)]
    pub skip_schema: bool,
}

impl MigrateArgs {
    /// Execute the migrate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Running legacy migration");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let client = PostgresClient::new(config.postgresql.clone()).await?;
        client.test_connection().await?;
        tracing::info!(target_db = %client.target(), "Connected");

        if !self.skip_schema {
            client.ensure_schema().await?;
        }

        let adapter = Arc::new(PostgresAdapter::new(client));
        let migrator =
            LegacyMigrator::new(adapter.clone(), adapter.clone(), adapter);
        let outcome = migrator.run().await?;

        if outcome.performed {
            println!("✅ Legacy migration complete");
            println!("   Files re-owned:    {}", outcome.files_reassigned);
            println!("   Jobs carried over: {}", outcome.jobs_migrated);
        } else {
            println!("✅ No legacy installation found; nothing to migrate");
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_args_defaults() {
        let args = MigrateArgs { skip_schema: false };
        assert!(!args.skip_schema);
    }
}
