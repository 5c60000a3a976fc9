// Folio - LMS Quiz Attempt Export Toolkit
// Copyright (c) 2025 Folio Contributors
// Licensed under the MIT License

//! # Folio - LMS Quiz Attempt Export Toolkit
//!
//! Folio handles the provisioning side of exporting quiz attempts to PDF on
//! a learning-management platform: it resolves and creates the filesystem
//! directories exports are written into, normalizes the plugin's stored
//! settings, and migrates data from a legacy branded installation of the
//! same functionality. The PDF rendering pipeline itself belongs to the
//! host platform.
//!
//! ## Architecture
//!
//! Folio follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export provisioning, legacy migration)
//! - [`adapters`] - Store backends (PostgreSQL, in-memory)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Service configuration management
//! - [`logging`] - Structured logging
//!
//! The host platform's configuration store, schema introspection, and
//! record store are reached through the traits in [`adapters::store`];
//! every component takes them as explicit parameters, so tests substitute
//! the in-memory implementation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use folio::adapters::memory::MemoryStore;
//! use folio::core::export::{ExportDirs, ExportSettings};
//! use folio::domain::{Attempt, AttemptId, CourseId, ModuleId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryStore::new());
//!     store.seed_config("folio", "pdfexportdir", "/srv/exports");
//!
//!     // Normalized plugin settings
//!     let settings = ExportSettings::load(store.as_ref()).await?;
//!     println!("renderer delay: {:?}", settings.mathjax_delay);
//!
//!     // Provision the export directory for an attempt
//!     let attempt = Attempt::new(
//!         AttemptId::new(311)?,
//!         CourseId::new(7)?,
//!         ModuleId::new(42)?,
//!     );
//!     let dirs = ExportDirs::new(store.clone());
//!     let path = dirs.prepare(&attempt).await?;
//!     println!("exports go to {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error type
//! [`domain::FolioError`] distinguishes the conditions an administrator has
//! to fix (missing configuration, missing or unwritable directories) from
//! store failures bubbled up from the backend.
//!
//! ## Logging
//!
//! Folio uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting migration");
//! warn!(count = 0, "No pending jobs found");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
