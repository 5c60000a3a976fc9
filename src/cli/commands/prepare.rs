//! Prepare command implementation
//!
//! Provisions the export directory for one activity. Useful as an
//! administrator smoke check: it exercises the configured base directory
//! exactly the way a real export would.

use crate::adapters::postgresql::{PostgresAdapter, PostgresClient};
use crate::config::load_config;
use crate::core::export::{ExportDirs, ExportSettings};
use crate::domain::{CourseId, FolioError, ModuleId};
use clap::Args;
use std::sync::Arc;

/// Arguments for the prepare command
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Course id the activity belongs to
    #[arg(long)]
    pub course: i64,

    /// Activity-module id
    #[arg(long)]
    pub module: i64,
}

impl PrepareArgs {
    /// Execute the prepare command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (course_id, module_id) = match (CourseId::new(self.course), ModuleId::new(self.module))
        {
            (Ok(c), Ok(m)) => (c, m),
            (Err(e), _) | (_, Err(e)) => {
                println!("❌ {e}");
                return Ok(2);
            }
        };

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let client = PostgresClient::new(config.postgresql.clone()).await?;
        let adapter = Arc::new(PostgresAdapter::new(client));

        let settings = ExportSettings::load(adapter.as_ref()).await?;
        let dirs = ExportDirs::new(adapter);

        match dirs.prepare_for(course_id, module_id).await {
            Ok(path) => {
                println!("✅ Export directory ready: {}", path.display());
                match settings.generation_timeout {
                    Some(timeout) => println!("   Renderer timeout:  {}s", timeout.as_secs()),
                    None => println!("   Renderer timeout:  none"),
                }
                println!(
                    "   Formula delay:     {}ms",
                    settings.mathjax_delay.as_millis()
                );
                Ok(0)
            }
            // Conditions the administrator has to fix; not process failures.
            Err(
                e @ (FolioError::Configuration(_)
                | FolioError::MissingDirectory { .. }
                | FolioError::UnwritableDirectory { .. }),
            ) => {
                println!("❌ {e}");
                Ok(2)
            }
            Err(other) => Err(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_args_hold_raw_ids() {
        let args = PrepareArgs {
            course: 7,
            module: 42,
        };
        assert_eq!(args.course, 7);
        assert_eq!(args.module, 42);
    }
}
