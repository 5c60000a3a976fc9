//! Result type alias for folio

use super::errors::FolioError;

/// Result type alias used throughout the crate for fallible operations
pub type Result<T> = std::result::Result<T, FolioError>;
