//! Configuration loading
//!
//! Reads `folio.toml`, expands `${VAR}` references from the environment,
//! applies `FOLIO_*` overrides and validates the result. A configuration
//! that loads successfully is a configuration that passed validation.

use crate::config::schema::FolioConfig;
use crate::config::secret::secret_dsn;
use crate::domain::{FolioError, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// Load and validate a configuration file
///
/// # Errors
///
/// Returns [`FolioError::Configuration`] when the file is missing or
/// unreadable, references unset environment variables, is not valid TOML,
/// or fails validation.
pub fn load_config(path: impl AsRef<Path>) -> Result<FolioConfig> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(FolioError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path).map_err(|e| {
        FolioError::Configuration(format!("Cannot read {}: {e}", path.display()))
    })?;
    let expanded = expand_env_refs(&raw)?;

    let mut config: FolioConfig = toml::from_str(&expanded)
        .map_err(|e| FolioError::Configuration(format!("Invalid TOML in {}: {e}", path.display())))?;
    apply_overrides(&mut config);

    config
        .validate()
        .map_err(FolioError::Configuration)?;
    Ok(config)
}

/// Expand `${VAR}` references against the process environment
///
/// Comment lines pass through untouched so a commented-out credential does
/// not have to exist. A reference to an unset variable is an error: a
/// missing secret should fail at startup, not end up as a literal
/// placeholder inside a connection string.
fn expand_env_refs(input: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid env-ref pattern");
    let mut missing: Vec<String> = Vec::new();
    let mut out = String::with_capacity(input.len());

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            out.push_str(line);
        } else {
            let expanded = pattern.replace_all(line, |caps: &Captures| {
                let name = caps[1].to_string();
                std::env::var(&name).unwrap_or_else(|_| {
                    if !missing.contains(&name) {
                        missing.push(name);
                    }
                    String::new()
                })
            });
            out.push_str(&expanded);
        }
        out.push('\n');
    }

    if missing.is_empty() {
        Ok(out)
    } else {
        Err(FolioError::Configuration(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )))
    }
}

/// Apply `FOLIO_<SECTION>_<KEY>` environment overrides
///
/// Unparseable numeric overrides are ignored rather than failing the load;
/// validation afterwards still catches out-of-range values.
fn apply_overrides(config: &mut FolioConfig) {
    let var = |name: &str| std::env::var(name).ok();

    if let Some(level) = var("FOLIO_APPLICATION_LOG_LEVEL") {
        config.application.log_level = level;
    }
    if let Some(dsn) = var("FOLIO_POSTGRESQL_CONNECTION_STRING") {
        config.postgresql.connection_string = secret_dsn(dsn);
    }
    if let Some(n) = var("FOLIO_POSTGRESQL_MAX_CONNECTIONS").and_then(|v| v.parse().ok()) {
        config.postgresql.max_connections = n;
    }
    if let Some(secs) = var("FOLIO_POSTGRESQL_STATEMENT_TIMEOUT_SECONDS").and_then(|v| v.parse().ok())
    {
        config.postgresql.statement_timeout_seconds = secs;
    }
    if let Some(enabled) = var("FOLIO_LOGGING_LOCAL_ENABLED").and_then(|v| v.parse().ok()) {
        config.logging.local_enabled = enabled;
    }
    if let Some(path) = var("FOLIO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_replaces_set_variables() {
        std::env::set_var("FOLIO_LOADER_TEST_SET", "swapped-in");
        let out = expand_env_refs("value = \"${FOLIO_LOADER_TEST_SET}\"").unwrap();
        assert_eq!(out, "value = \"swapped-in\"\n");
        std::env::remove_var("FOLIO_LOADER_TEST_SET");
    }

    #[test]
    fn test_expand_reports_every_unset_variable_once() {
        std::env::remove_var("FOLIO_LOADER_TEST_A");
        std::env::remove_var("FOLIO_LOADER_TEST_B");
        let input = "a = \"${FOLIO_LOADER_TEST_A}\"\nb = \"${FOLIO_LOADER_TEST_B}${FOLIO_LOADER_TEST_A}\"";

        let err = expand_env_refs(input).unwrap_err().to_string();
        assert_eq!(err.matches("FOLIO_LOADER_TEST_A").count(), 1);
        assert!(err.contains("FOLIO_LOADER_TEST_B"));
    }

    #[test]
    fn test_expand_leaves_comments_alone() {
        let input = "# dsn = \"${FOLIO_LOADER_TEST_COMMENTED}\"";
        let out = expand_env_refs(input).unwrap();
        assert_eq!(out, format!("{input}\n"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("no-such-file.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
