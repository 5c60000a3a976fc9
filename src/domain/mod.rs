//! Domain models and types for folio.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`CourseId`], [`ModuleId`], [`AttemptId`])
//! - **Domain models** ([`Attempt`], [`ExportJob`])
//! - **Error types** ([`FolioError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! The newtype pattern keeps the host platform's numeric ids from being
//! mixed: a `CourseId` cannot be passed where a `ModuleId` is expected.

pub mod attempt;
pub mod errors;
pub mod ids;
pub mod job;
pub mod result;

// Re-export commonly used types for convenience
pub use attempt::Attempt;
pub use errors::{FolioError, StoreError};
pub use ids::{AttemptId, CourseId, ModuleId};
pub use job::{ExportJob, JobStatus, LEGACY_QUEUE_TABLE, QUEUE_TABLE};
pub use result::Result;

/// Component namespace of the current installation
///
/// Used both as the configuration namespace and as the owning-component tag
/// on stored files.
pub const COMPONENT: &str = "folio";

/// Component namespace of the legacy branded installation
pub const LEGACY_COMPONENT: &str = "folio_hsnr";
