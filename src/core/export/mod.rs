//! Export provisioning
//!
//! Everything an export run needs before the renderer gets involved: the
//! normalized plugin settings and a provisioned directory to write into.
//! The rendering pipeline itself lives with the host.

pub mod dirs;
pub mod settings;

pub use dirs::ExportDirs;
pub use settings::ExportSettings;
