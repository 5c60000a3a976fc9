//! Logging and observability
//!
//! Structured logging via `tracing`: console output for interactive use and
//! an optional JSON file layer with rotation for service deployments.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
