//! Configuration management for folio.
//!
//! TOML-based service configuration with environment variable substitution
//! (`${VAR_NAME}`), `FOLIO_*` overrides, defaults for optional settings, and
//! validation on load.
//!
//! Note the split: this is the *service's* configuration (database access,
//! logging). The plugin's own settings (export directory, renderer timeout,
//! formula delay) live in the host platform's configuration store and are
//! read through [`crate::adapters::store::ConfigStore`].
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [postgresql]
//! connection_string = "${FOLIO_PG_URL}"
//! max_connections = 10
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/folio"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, FolioConfig, LoggingConfig, PostgreSQLConfig};
pub use secret::{redacted, secret_dsn, Dsn, SecretDsn};
