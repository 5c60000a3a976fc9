//! Export directory provisioning
//!
//! Resolves the filesystem location generated PDFs are written to, keyed by
//! course and activity module, and creates the directory tree on demand.

use crate::adapters::store::traits::ConfigStore;
use crate::core::export::settings::keys;
use crate::domain::{Attempt, CourseId, FolioError, ModuleId, Result, COMPONENT};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Export directory provisioner
///
/// Validates the administrator-configured base directory and provisions the
/// per-activity subtree `{base}/{course_id}/{module_id}` under it. Repeated
/// calls for the same activity are no-ops returning the same path.
pub struct ExportDirs {
    config: Arc<dyn ConfigStore>,
}

impl ExportDirs {
    /// Create a provisioner reading from the given configuration store
    pub fn new(config: Arc<dyn ConfigStore>) -> Self {
        Self { config }
    }

    /// Resolve and provision the export directory for an attempt
    ///
    /// # Errors
    ///
    /// - [`FolioError::Configuration`] when the base directory setting is
    ///   empty or unset.
    /// - [`FolioError::MissingDirectory`] when the configured base does not
    ///   exist on disk.
    /// - [`FolioError::UnwritableDirectory`] when the base is not writable,
    ///   or when creating the subtree fails. The reported path is the base
    ///   directory in both cases: a creation failure means the base tree is
    ///   not usable as configured.
    pub async fn prepare(&self, attempt: &Attempt) -> Result<PathBuf> {
        self.prepare_for(attempt.course_id(), attempt.module_id())
            .await
    }

    /// Resolve and provision the export directory for an activity
    pub async fn prepare_for(&self, course_id: CourseId, module_id: ModuleId) -> Result<PathBuf> {
        let export_dir = self
            .config
            .get(COMPONENT, keys::PDF_EXPORT_DIR)
            .await?
            .unwrap_or_default();
        if export_dir.is_empty() {
            return Err(FolioError::Configuration(format!(
                "'{}' is not set",
                keys::PDF_EXPORT_DIR
            )));
        }

        let base = PathBuf::from(&export_dir);
        if !base.is_dir() {
            return Err(FolioError::MissingDirectory { path: export_dir });
        }
        if !is_writable(&base)? {
            return Err(FolioError::UnwritableDirectory { path: export_dir });
        }

        let target = base
            .join(course_id.to_string())
            .join(module_id.to_string());
        if !target.is_dir() {
            if let Err(e) = create_dir_tree(&target) {
                tracing::warn!(
                    target_dir = %target.display(),
                    error = %e,
                    "Failed to create export subdirectory"
                );
                return Err(FolioError::UnwritableDirectory { path: export_dir });
            }
            tracing::debug!(target_dir = %target.display(), "Created export subdirectory");
        }

        Ok(target)
    }
}

/// Writability as reported by the directory's permission bits
fn is_writable(path: &Path) -> Result<bool> {
    Ok(!fs::metadata(path)?.permissions().readonly())
}

/// Recursive directory creation with broadly permissive mode bits
///
/// Mode 0o777 before umask, so the platform's web and cron processes can
/// both write into the tree. An already-existing directory is success,
/// which makes concurrent provisioning of the same activity benign.
#[cfg(unix)]
fn create_dir_tree(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o777)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_tree(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_writable_plain_tempdir() {
        let dir = TempDir::new().unwrap();
        assert!(is_writable(dir.path()).unwrap());
    }

    #[test]
    fn test_create_dir_tree_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("7").join("42");

        create_dir_tree(&target).unwrap();
        assert!(target.is_dir());

        // Second creation of an existing tree is a no-op, not an error.
        create_dir_tree(&target).unwrap();
    }
}
