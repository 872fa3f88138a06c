//! Working tree paths for the firmware checkout and the target CODAL project.

use std::path::{Path, PathBuf};

use crate::domain::build_config::{LayoutConfig, VersionSettings};

/// Resolved paths of one build invocation.
///
/// The target's default source directory and its staging directory hold the
/// same logical content under two names; at most one of them holds the
/// original tree at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    firmware_root: PathBuf,
    target_root: PathBuf,
    source_dir: String,
    staging_dir: String,
    config_file: String,
    config_backup: String,
}

impl Layout {
    pub fn new(firmware_root: PathBuf, target_root: PathBuf, config: &LayoutConfig) -> Self {
        Self {
            firmware_root,
            target_root,
            source_dir: config.source_dir.clone(),
            staging_dir: config.staging_dir.clone(),
            config_file: config.config_file.clone(),
            config_backup: config.config_backup.clone(),
        }
    }

    /// Resolve the target root: an explicit override wins, otherwise the
    /// configured value relative to the firmware root.
    pub fn resolve(
        firmware_root: PathBuf,
        target_override: Option<PathBuf>,
        config: &LayoutConfig,
    ) -> Self {
        let target_root = target_override
            .unwrap_or_else(|| firmware_root.join(Path::new(&config.target_root)));
        Self::new(firmware_root, target_root, config)
    }

    pub fn firmware_root(&self) -> &Path {
        &self.firmware_root
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// This repository's own source tree.
    pub fn firmware_source(&self) -> PathBuf {
        self.firmware_root.join(&self.source_dir)
    }

    /// This repository's configuration file.
    pub fn firmware_config(&self) -> PathBuf {
        self.firmware_root.join(&self.config_file)
    }

    /// The target's default source directory.
    pub fn target_source(&self) -> PathBuf {
        self.target_root.join(&self.source_dir)
    }

    /// Where the target's source directory waits while staged.
    pub fn target_staging(&self) -> PathBuf {
        self.target_root.join(&self.staging_dir)
    }

    pub fn target_config(&self) -> PathBuf {
        self.target_root.join(&self.config_file)
    }

    pub fn target_config_backup(&self) -> PathBuf {
        self.target_root.join(&self.config_backup)
    }

    /// Checkout directory of an embedded library inside the target.
    pub fn library_checkout(&self, settings: &VersionSettings, library: &str) -> PathBuf {
        self.target_root.join(&settings.libraries_dir).join(library)
    }

    /// Header in the staged source tree that receives the version definition.
    pub fn staged_header(&self, settings: &VersionSettings) -> PathBuf {
        self.target_source().join(&settings.header)
    }
}
