// Folio - LMS Quiz Attempt Export Toolkit
// Copyright (c) 2025 Folio Contributors
// Licensed under the MIT License

use clap::Parser;
use folio::cli::{Cli, Commands};
use folio::config::LoggingConfig;
use folio::logging::{init_logging, LoggingGuard};
use std::process;

#[tokio::main]
async fn main() {
    // A .env file is optional; ignore its absence.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let _guard = match console_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "folio starting");

    process::exit(match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            5
        }
    });
}

// The CLI logs to the console only; the rolling file layer is for service
// deployments embedding the library.
fn console_logging(cli: &Cli) -> folio::domain::Result<LoggingGuard> {
    let level = cli.log_level.as_deref().unwrap_or("info");
    let config = LoggingConfig {
        local_enabled: false,
        ..LoggingConfig::default()
    };
    init_logging(level, &config)
}

async fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Migrate(args) => args.execute(&cli.config).await,
        Commands::Prepare(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
