use crate::domain::{AppError, BuildSettings};
use crate::ports::BuildRunner;
use std::path::Path;
use std::process::Command;

/// Runs the delegated build as a child process.
///
/// The child inherits this process's environment and stdio, so the build
/// tool's own output reaches the terminal unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProcessBuildRunner;

impl ProcessBuildRunner {
    pub fn new() -> Self {
        Self
    }
}

impl BuildRunner for ProcessBuildRunner {
    fn run(&self, settings: &BuildSettings, cwd: &Path) -> Result<Option<i32>, AppError> {
        let status = Command::new(&settings.program)
            .args(&settings.args)
            .current_dir(cwd)
            .status()
            .map_err(|e| AppError::BuildLaunch {
                command: settings.command_line(),
                details: format!("{} (in {})", e, cwd.display()),
            })?;

        Ok(status.code())
    }
}
