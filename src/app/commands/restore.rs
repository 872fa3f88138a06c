//! Recover a target left staged by an interrupted run.

use std::path::PathBuf;

use crate::app::services::staging::{Restored, StagedTree};
use crate::domain::{AppError, Layout};

#[derive(Debug, Clone, Default)]
pub struct RestoreOptions {
    /// Target project root, overriding the configured one.
    pub target_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreOutcome {
    pub source_restored: bool,
    pub config_restored: bool,
}

impl RestoreOutcome {
    pub fn is_noop(&self) -> bool {
        !self.source_restored && !self.config_restored
    }
}

pub fn execute(layout: &Layout) -> Result<RestoreOutcome, AppError> {
    let Restored { source, config } = StagedTree::adopt(layout).restore()?;
    Ok(RestoreOutcome { source_restored: source, config_restored: config })
}
