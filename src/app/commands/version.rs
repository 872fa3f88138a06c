//! Codal version string: library queries and header stamping.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::version::{append_line, select_version};
use crate::domain::{
    AppError, BuildConfig, Layout, LibraryVersion, VersionSettings, VersionString,
};
use crate::ports::{BuildRunner, GitPort};

#[derive(Debug, Clone, Default)]
pub struct VersionOptions {
    /// Target project root, overriding the configured one.
    pub target_root: Option<std::path::PathBuf>,
    /// Libraries to report, overriding the configured list.
    pub libraries: Vec<String>,
}

/// Compute the version string of the target's embedded libraries.
pub fn execute<G: GitPort, R: BuildRunner>(
    ctx: &AppContext<G, R>,
    layout: &Layout,
    config: &BuildConfig,
) -> Result<VersionString, AppError> {
    collect(ctx.git(), layout, &config.version)
}

/// Version of one checkout: its tag description, else its short commit id.
pub fn library_version<G: GitPort>(git: &G, checkout: &Path) -> Result<String, AppError> {
    let described = git.describe_tags(checkout)?;
    select_version(&described, || {
        debug!(checkout = %checkout.display(), output = %described, "No tag; using commit id");
        git.short_commit(checkout)
    })
}

/// Query every configured library, in order.
pub fn collect<G: GitPort>(
    git: &G,
    layout: &Layout,
    settings: &VersionSettings,
) -> Result<VersionString, AppError> {
    let mut libraries = Vec::with_capacity(settings.libraries.len());
    for name in &settings.libraries {
        let checkout = layout.library_checkout(settings, name);
        let version = library_version(git, &checkout)?;
        debug!(library = %name, version = %version, "Resolved library version");
        libraries.push(LibraryVersion::new(name.as_str(), version));
    }
    Ok(VersionString::join(&libraries))
}

/// Append the version definition to `header`, creating it if needed.
pub fn stamp_header(header: &Path, symbol: &str, version: &VersionString) -> Result<(), AppError> {
    let existing = match fs::read_to_string(header) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };
    fs::write(header, append_line(&existing, &version.define_line(symbol)))?;
    Ok(())
}

/// Resolve the version string and stamp it into the staged header.
pub fn stamp<G: GitPort>(
    git: &G,
    layout: &Layout,
    settings: &VersionSettings,
) -> Result<VersionString, AppError> {
    let version = collect(git, layout, settings)?;
    let header = layout.staged_header(settings);
    stamp_header(&header, &settings.define, &version)?;
    info!(header = %header.display(), version = %version, "Stamped version string");
    Ok(version)
}
