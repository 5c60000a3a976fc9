//! Business logic
//!
//! - [`export`] - export directory provisioning and settings normalization
//! - [`migrate`] - one-time legacy installation migration

pub mod export;
pub mod migrate;
