//! Domain error types
//!
//! The error hierarchy for folio. All errors are domain-specific and don't
//! expose third-party types; collaborator failures arrive wrapped in
//! [`StoreError`] and bubble through unmodified.

use thiserror::Error;

/// Main folio error type
///
/// Every condition in here requires administrator intervention (fix the
/// configuration, fix directory permissions, fix the schema) rather than
/// automatic remediation, so callers surface these instead of retrying.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Required setting missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configured base export directory does not exist
    #[error("Export directory does not exist: {path}")]
    MissingDirectory {
        /// The configured base directory
        path: String,
    },

    /// Base export directory (or a subpath being created under it) is not
    /// writable by the running process
    #[error("Export directory is not writable: {path}")]
    UnwritableDirectory {
        /// The configured base directory
        path: String,
    },

    /// Database/schema collaborator errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// I/O errors outside the directory-provisioning taxonomy
    #[error("I/O error: {0}")]
    Io(String),
}

/// Store collaborator errors
///
/// Failures from the configuration store, schema introspection, or the
/// record store. These carry the backend's message but not its types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to reach the backend
    #[error("Failed to connect to store: {0}")]
    Connection(String),

    /// A query or statement failed
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema introspection or bootstrap failed
    #[error("Schema error: {0}")]
    Schema(String),

    /// Row or payload (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Store(StoreError::Serialization(err.to_string()))
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folio_error_display() {
        let err = FolioError::Configuration("pdfexportdir is not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: pdfexportdir is not set"
        );
    }

    #[test]
    fn test_directory_errors_name_the_path() {
        let missing = FolioError::MissingDirectory {
            path: "/srv/exports".to_string(),
        };
        assert!(missing.to_string().contains("/srv/exports"));

        let unwritable = FolioError::UnwritableDirectory {
            path: "/srv/exports".to_string(),
        };
        assert!(unwritable.to_string().contains("/srv/exports"));
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::Query("relation does not exist".to_string());
        let err: FolioError = store_err.into();
        assert!(matches!(err, FolioError::Store(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = FolioError::Io("disk".to_string());
        let _: &dyn std::error::Error = &err;
        let err = StoreError::Connection("refused".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
