//! Plugin settings normalization
//!
//! The host platform stores plugin settings as raw strings. This module
//! coerces them into typed values with the documented fallback rules. The
//! policy is deliberately lenient: malformed numerics coerce to zero and
//! fall into the default branches rather than raising.

use crate::adapters::store::traits::ConfigStore;
use crate::domain::{Result, COMPONENT};
use std::time::Duration;

/// Configuration keys in the plugin namespace
pub mod keys {
    /// Base directory PDF exports are written under
    pub const PDF_EXPORT_DIR: &str = "pdfexportdir";

    /// Renderer timeout in seconds; empty or `< 1` disables the timeout
    pub const PDF_GENERATION_TIMEOUT: &str = "pdfgenerationtimeout";

    /// Delay granted to formula rendering, stored in seconds
    pub const MATHJAX_DELAY: &str = "mathjaxdelay";

    /// Course-category filter, opaque to folio
    pub const CAT_FILTER: &str = "catfilter";

    /// Whether automatic export on submission is enabled
    pub const AUTO_EXPORT: &str = "autoexport";
}

/// Fallback formula-rendering delay in seconds
pub const DEFAULT_MATHJAX_DELAY_SECS: u64 = 10;

/// Normalized plugin settings
///
/// `export_dir` and `category_filter` are carried raw: the export directory
/// is validated by the directory provisioner on first use, and the category
/// filter belongs to the host's export selection logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Raw configured base export directory
    pub export_dir: Option<String>,

    /// Renderer timeout; `None` means no timeout is enforced
    pub generation_timeout: Option<Duration>,

    /// Formula-rendering delay, normalized to milliseconds, never below 1 s
    pub mathjax_delay: Duration,

    /// Raw course-category filter
    pub category_filter: Option<String>,
}

impl ExportSettings {
    /// Load and normalize the plugin namespace
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself fails; malformed values
    /// normalize to their defaults.
    pub async fn load(config: &dyn ConfigStore) -> Result<Self> {
        let export_dir = config.get(COMPONENT, keys::PDF_EXPORT_DIR).await?;
        let raw_timeout = config.get(COMPONENT, keys::PDF_GENERATION_TIMEOUT).await?;
        let raw_delay = config.get(COMPONENT, keys::MATHJAX_DELAY).await?;
        let category_filter = config.get(COMPONENT, keys::CAT_FILTER).await?;

        Ok(Self {
            export_dir,
            generation_timeout: normalize_timeout(raw_timeout.as_deref()).map(Duration::from_secs),
            mathjax_delay: Duration::from_millis(normalize_delay(raw_delay.as_deref())),
            category_filter,
        })
    }
}

/// True for the values the store treats as "not set": absent, empty, `"0"`.
fn is_falsy(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(s) => s.is_empty() || s == "0",
    }
}

/// Lenient integer coercion; anything unparseable becomes 0.
fn coerce_int(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Normalize the renderer timeout to whole seconds
///
/// Falsy input or a coerced value below 1 disables the timeout entirely.
pub fn normalize_timeout(raw: Option<&str>) -> Option<u64> {
    if is_falsy(raw) {
        return None;
    }
    let secs = coerce_int(raw.unwrap_or_default());
    if secs < 1 {
        None
    } else {
        Some(secs as u64)
    }
}

/// Normalize the formula-rendering delay to milliseconds
///
/// The stored value is seconds. Falsy or sub-second input falls back to
/// [`DEFAULT_MATHJAX_DELAY_SECS`], so the result is never below 1000 ms.
pub fn normalize_delay(raw: Option<&str>) -> u64 {
    let secs = if is_falsy(raw) {
        DEFAULT_MATHJAX_DELAY_SECS
    } else {
        let coerced = coerce_int(raw.unwrap_or_default());
        if coerced < 1 {
            DEFAULT_MATHJAX_DELAY_SECS
        } else {
            coerced as u64
        }
    };
    secs * 1000
}
