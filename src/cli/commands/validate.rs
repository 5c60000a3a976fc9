//! Validate-config command
//!
//! Loads the configuration the same way every other command does, so a
//! passing run here means `migrate` and `prepare` will get past config
//! loading too.

use crate::config::{load_config, redacted};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("❌ {config_path} is invalid: {e}");
                return Ok(2);
            }
        };

        println!("✅ {config_path} is valid");
        println!();
        println!("  log level        {}", config.application.log_level);
        println!(
            "  database         {}",
            redacted(&config.postgresql.connection_string)
        );
        println!("  pool size        {}", config.postgresql.max_connections);
        if config.logging.local_enabled {
            println!(
                "  file logging     {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  file logging     disabled");
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_path_exits_with_config_error() {
        let args = ValidateArgs {};
        let code = args.execute("definitely-not-here.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
