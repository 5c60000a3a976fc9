//! Command-line interface
//!
//! Argument parsing via clap; the command implementations live in
//! [`commands`].

pub mod commands;

use clap::{Parser, Subcommand};

/// folio - LMS quiz attempt export toolkit
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the folio.toml configuration file
    #[arg(short, long, default_value = "folio.toml", env = "FOLIO_CONFIG")]
    pub config: String,

    /// Console log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FOLIO_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the one-time migration from a legacy branded installation
    Migrate(commands::migrate::MigrateArgs),

    /// Provision the export directory for an activity
    Prepare(commands::prepare::PrepareArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_uses_default_config_path() {
        let cli = Cli::parse_from(["folio", "migrate"]);
        assert_eq!(cli.config, "folio.toml");
        assert!(matches!(cli.command, Commands::Migrate(_)));
    }

    #[test]
    fn test_config_path_can_be_overridden() {
        let cli = Cli::parse_from(["folio", "--config", "custom.toml", "migrate"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_prepare_takes_course_and_module() {
        let cli = Cli::parse_from(["folio", "prepare", "--course", "7", "--module", "42"]);
        match cli.command {
            Commands::Prepare(args) => {
                assert_eq!(args.course, 7);
                assert_eq!(args.module, 42);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_remaining_subcommands_parse() {
        assert!(matches!(
            Cli::parse_from(["folio", "validate-config"]).command,
            Commands::ValidateConfig(_)
        ));
        assert!(matches!(
            Cli::parse_from(["folio", "init"]).command,
            Commands::Init(_)
        ));
    }
}
