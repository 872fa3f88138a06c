//! Scoped swap of the firmware tree into the target project.

use tracing::{error, info, warn};

use crate::adapters::filesystem::{
    copy_file_if_exists, copy_tree_if_exists, remove_if_exists, rename_if_exists,
};
use crate::domain::{AppError, Layout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Armed,
    Released,
    Stranded,
}

/// Which slots a restore put back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Restored {
    pub source: bool,
    pub config: bool,
}

/// Owns the substitution of the target's source tree (and optionally its
/// configuration file) for the firmware's own.
///
/// The swap is undone by [`StagedTree::restore`] or, failing that, when the
/// guard is dropped. Only [`StagedTree::strand`] leaves the target staged.
#[derive(Debug)]
pub struct StagedTree<'a> {
    layout: &'a Layout,
    swap_config: bool,
    source_staged: bool,
    config_staged: bool,
    state: GuardState,
}

impl<'a> StagedTree<'a> {
    /// Arm a guard over `layout` without touching the filesystem.
    pub fn new(layout: &'a Layout, swap_config: bool) -> Self {
        Self {
            layout,
            swap_config,
            source_staged: false,
            config_staged: false,
            state: GuardState::Armed,
        }
    }

    /// Take over a target left staged by an earlier run.
    ///
    /// A slot counts as staged when its backup is present on disk.
    pub fn adopt(layout: &'a Layout) -> Self {
        let source_staged = layout.target_staging().exists();
        let config_staged = layout.target_config_backup().exists();
        Self {
            layout,
            swap_config: config_staged,
            source_staged,
            config_staged,
            state: GuardState::Armed,
        }
    }

    /// Move the target's originals aside and copy the firmware's in.
    ///
    /// A leftover backup from an earlier run is discarded first. On error the
    /// guard still knows which slots were vacated, so restoring afterwards
    /// puts the originals back.
    pub fn stage(&mut self) -> Result<(), AppError> {
        let layout = self.layout;

        remove_if_exists(&layout.target_staging())?;
        rename_if_exists(&layout.target_source(), &layout.target_staging())?;
        self.source_staged = true;
        copy_tree_if_exists(&layout.firmware_source(), &layout.target_source())?;

        if self.swap_config {
            remove_if_exists(&layout.target_config_backup())?;
            rename_if_exists(&layout.target_config(), &layout.target_config_backup())?;
            self.config_staged = true;
            copy_file_if_exists(&layout.firmware_config(), &layout.target_config())?;
        }

        info!(
            target = %layout.target_root().display(),
            config = self.swap_config,
            "Staged firmware source"
        );
        Ok(())
    }

    /// Put the target's originals back. Subsequent calls are no-ops.
    ///
    /// Both slots are attempted even if the first fails; the first error wins.
    pub fn restore(&mut self) -> Result<Restored, AppError> {
        if self.state != GuardState::Armed {
            return Ok(Restored::default());
        }
        self.state = GuardState::Released;

        let layout = self.layout;
        let source = if self.source_staged {
            put_back(&layout.target_staging(), &layout.target_source())
        } else {
            Ok(false)
        };
        let config = if self.config_staged {
            put_back(&layout.target_config_backup(), &layout.target_config())
        } else {
            Ok(false)
        };

        let restored = Restored { source: source?, config: config? };
        info!(target = %layout.target_root().display(), "Restored target layout");
        Ok(restored)
    }

    /// Leave the target staged. The originals stay under their backup names.
    pub fn strand(&mut self) {
        if self.state == GuardState::Armed {
            self.state = GuardState::Stranded;
            warn!(
                staging = %self.layout.target_staging().display(),
                "Target left staged; run `restore` to recover the original source"
            );
        }
    }
}

impl Drop for StagedTree<'_> {
    fn drop(&mut self) {
        if self.state != GuardState::Armed {
            return;
        }
        warn!("Restoring target layout from an abandoned staging scope");
        if let Err(err) = self.restore() {
            error!(error = %err, "Failed to restore target layout");
        }
    }
}

/// Clear the staged occupant of `slot` and move `backup` into it.
fn put_back(backup: &std::path::Path, slot: &std::path::Path) -> Result<bool, AppError> {
    remove_if_exists(slot)?;
    rename_if_exists(backup, slot)
}
