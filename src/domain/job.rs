//! Export queue records
//!
//! A queue record is created by the host's task subsystem whenever an
//! automatic export is requested. Folio itself only reads and re-inserts
//! these records during legacy migration; the payload is opaque to it.

use crate::domain::ids::AttemptId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Queue table of the current installation
pub const QUEUE_TABLE: &str = "folio_queue";

/// Queue table of the legacy branded installation
///
/// Its existence is the marker that a legacy installation is present. Folio
/// never creates or drops this table.
pub const LEGACY_QUEUE_TABLE: &str = "folio_queue_hsnr";

/// Lifecycle state of an export job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Not yet picked up by the rendering pipeline
    Waiting,
    /// Currently being rendered
    Processing,
    /// Rendered and stored
    Complete,
    /// Rendering failed
    Failed,
}

impl JobStatus {
    /// String encoding used in the queue tables
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Waiting => "waiting",
            JobStatus::Processing => "processing",
            JobStatus::Complete => "complete",
            JobStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(JobStatus::Waiting),
            "processing" => Ok(JobStatus::Processing),
            "complete" => Ok(JobStatus::Complete),
            "failed" => Ok(JobStatus::Failed),
            other => Err(format!("Unknown job status '{other}'")),
        }
    }
}

/// A persisted export job
///
/// `id` is `None` until the record store assigns one on insert. When a
/// record is carried over from the legacy queue, the legacy id is dropped so
/// the current installation assigns its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportJob {
    /// Store-assigned identifier
    pub id: Option<i64>,

    /// The attempt this export is for
    pub attempt_id: AttemptId,

    /// User who requested (or owns) the export
    pub user_id: i64,

    /// Lifecycle state
    pub status: JobStatus,

    /// Task-specific payload, opaque to folio
    pub payload: serde_json::Value,

    /// When the job was enqueued
    pub created_at: DateTime<Utc>,
}

impl ExportJob {
    /// Copy of this record with the identifier dropped
    pub fn without_id(&self) -> ExportJob {
        ExportJob {
            id: None,
            ..self.clone()
        }
    }
}
