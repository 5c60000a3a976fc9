//! Store abstraction layer
//!
//! Defines the traits the host platform's persistence is reached through.

pub mod traits;

pub use traits::{ConfigStore, RecordStore, SchemaInspector};
