//! Stage, stamp, delegate, restore.

use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::app::AppContext;
use crate::app::commands::version;
use crate::app::services::staging::StagedTree;
use crate::domain::{AppError, BuildConfig, BuildSettings, Layout, Variant, VersionString};
use crate::ports::{BuildRunner, GitPort};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub variant: Variant,
    /// Target project root, overriding the configured one.
    pub target_root: Option<PathBuf>,
    /// Libraries to report in the version string, overriding the configured list.
    pub libraries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub variant: Variant,
    /// Stamped version string; `None` for variants that do not stamp.
    pub version: Option<VersionString>,
    /// Exit code of the delegated build, recorded but not acted upon.
    pub exit_code: Option<i32>,
}

pub fn execute<G: GitPort, R: BuildRunner>(
    ctx: &AppContext<G, R>,
    layout: &Layout,
    config: &BuildConfig,
    variant: Variant,
) -> Result<BuildOutcome, AppError> {
    info!(
        variant = %variant,
        firmware = %layout.firmware_root().display(),
        target = %layout.target_root().display(),
        "Starting build"
    );

    match variant {
        Variant::V1 => execute_v1(ctx, layout, config),
        Variant::V2 => execute_v2(ctx, layout, config),
    }
}

/// No guard: a failure to stage or to launch the build leaves the target staged.
fn execute_v1<G: GitPort, R: BuildRunner>(
    ctx: &AppContext<G, R>,
    layout: &Layout,
    config: &BuildConfig,
) -> Result<BuildOutcome, AppError> {
    let mut staged = StagedTree::new(layout, Variant::V1.swaps_config());

    if let Err(err) = staged.stage() {
        staged.strand();
        return Err(err);
    }

    let exit_code = match delegate(ctx.runner(), layout, &config.build) {
        Ok(code) => code,
        Err(err) => {
            staged.strand();
            return Err(err);
        }
    };

    staged.restore()?;
    Ok(BuildOutcome { variant: Variant::V1, version: None, exit_code })
}

/// Failures anywhere between staging and the delegated build are reported,
/// the target is restored, and only then is the failure returned.
fn execute_v2<G: GitPort, R: BuildRunner>(
    ctx: &AppContext<G, R>,
    layout: &Layout,
    config: &BuildConfig,
) -> Result<BuildOutcome, AppError> {
    let mut staged = StagedTree::new(layout, Variant::V2.swaps_config());

    let attempt = stage_stamp_and_delegate(ctx, layout, config, &mut staged);
    if let Err(err) = &attempt {
        error!(error = %err, "Failed to build!");
    }

    staged.restore()?;

    let (version, exit_code) = attempt?;
    Ok(BuildOutcome { variant: Variant::V2, version: Some(version), exit_code })
}

fn stage_stamp_and_delegate<G: GitPort, R: BuildRunner>(
    ctx: &AppContext<G, R>,
    layout: &Layout,
    config: &BuildConfig,
    staged: &mut StagedTree<'_>,
) -> Result<(VersionString, Option<i32>), AppError> {
    staged.stage()?;

    let version = version::stamp(ctx.git(), layout, &config.version)
        .map_err(|e| AppError::StampFailed(Box::new(e)))?;

    let exit_code = delegate(ctx.runner(), layout, &config.build)
        .map_err(|e| AppError::DelegateFailed(Box::new(e)))?;

    Ok((version, exit_code))
}

fn delegate<R: BuildRunner>(
    runner: &R,
    layout: &Layout,
    settings: &BuildSettings,
) -> Result<Option<i32>, AppError> {
    info!(
        command = %settings.command_line(),
        cwd = %layout.target_root().display(),
        "Running delegated build"
    );

    let exit_code = runner.run(settings, layout.target_root())?;
    match exit_code {
        Some(0) => debug!("Delegated build exited successfully"),
        Some(code) => warn!(code, "Delegated build exited with non-zero status"),
        None => warn!("Delegated build was terminated by a signal"),
    }
    Ok(exit_code)
}
