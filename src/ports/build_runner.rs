use crate::domain::{AppError, BuildSettings};
use std::path::Path;

pub trait BuildRunner {
    /// Run the build entry point to completion with `cwd` as its working directory.
    ///
    /// Returns the exit code when the process exited normally. A non-zero
    /// code is not an error; `Err` means the process could not be run.
    fn run(&self, settings: &BuildSettings, cwd: &Path) -> Result<Option<i32>, AppError>;
}
