//! # iconsync-cli
//!
//! Command-line entry point and pipeline orchestration for the Figma icon
//! sync. The library target exists so the pipeline can be exercised by
//! integration tests; the `iconsync` binary is a thin wrapper around
//! [`config::SyncConfig::resolve`] and [`pipeline::run`].

pub mod config;
pub mod pipeline;

pub use config::{Cli, ConfigError, SyncConfig};
pub use pipeline::{SyncError, SyncReport, run};
