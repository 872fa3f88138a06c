//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation and command execution.

use std::path::PathBuf;

use crate::adapters::git::GitCommandAdapter;
use crate::adapters::process::ProcessBuildRunner;
use crate::app::config::load_config_with_overrides;
use crate::app::{
    AppContext,
    commands::{build, restore, version},
};
use crate::domain::{BuildConfig, Layout};

pub use crate::app::commands::build::{BuildOptions, BuildOutcome};
pub use crate::app::commands::restore::{RestoreOptions, RestoreOutcome};
pub use crate::app::commands::version::VersionOptions;
pub use crate::domain::{AppError, Variant, VersionString};

/// Create an `AppContext` backed by the real git and process adapters.
fn create_context() -> AppContext<GitCommandAdapter, ProcessBuildRunner> {
    AppContext::new(GitCommandAdapter::new(), ProcessBuildRunner::new())
}

fn resolve(
    firmware_root: PathBuf,
    target_root: Option<PathBuf>,
    libraries: &[String],
) -> Result<(BuildConfig, Layout), AppError> {
    let config = load_config_with_overrides(&firmware_root, libraries)?;
    let layout = Layout::resolve(firmware_root, target_root, &config.layout);
    Ok((config, layout))
}

// =============================================================================
// Build Command API
// =============================================================================

/// Stage the firmware in the current directory into the target and build it.
pub fn build(options: BuildOptions) -> Result<BuildOutcome, AppError> {
    build_at(std::env::current_dir()?, options)
}

/// Stage the firmware at `firmware_root` into the target and build it.
pub fn build_at(
    firmware_root: impl Into<PathBuf>,
    options: BuildOptions,
) -> Result<BuildOutcome, AppError> {
    let (config, layout) = resolve(firmware_root.into(), options.target_root, &options.libraries)?;
    build::execute(&create_context(), &layout, &config, options.variant)
}

// =============================================================================
// Version Command API
// =============================================================================

/// Compute the version string for the firmware in the current directory.
pub fn version(options: VersionOptions) -> Result<VersionString, AppError> {
    version_at(std::env::current_dir()?, options)
}

/// Compute the version string of the target's libraries without staging.
pub fn version_at(
    firmware_root: impl Into<PathBuf>,
    options: VersionOptions,
) -> Result<VersionString, AppError> {
    let (config, layout) = resolve(firmware_root.into(), options.target_root, &options.libraries)?;
    version::execute(&create_context(), &layout, &config)
}

// =============================================================================
// Restore Command API
// =============================================================================

/// Recover a stranded target for the firmware in the current directory.
pub fn restore(options: RestoreOptions) -> Result<RestoreOutcome, AppError> {
    restore_at(std::env::current_dir()?, options)
}

/// Recover a target left staged by an interrupted run.
pub fn restore_at(
    firmware_root: impl Into<PathBuf>,
    options: RestoreOptions,
) -> Result<RestoreOutcome, AppError> {
    let (_, layout) = resolve(firmware_root.into(), options.target_root, &[])?;
    restore::execute(&layout)
}
