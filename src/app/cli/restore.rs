//! Restore command implementation.

use crate::app::api::{self, RestoreOptions};
use crate::domain::AppError;

use super::LayoutArgs;

pub fn run_restore(layout: LayoutArgs) -> Result<(), AppError> {
    let options = RestoreOptions { target_root: layout.target_root };
    let outcome = match layout.firmware_root {
        Some(root) => api::restore_at(root, options)?,
        None => api::restore(options)?,
    };

    if outcome.is_noop() {
        println!("ℹ️ Nothing to restore; target is not staged");
        return Ok(());
    }
    if outcome.source_restored {
        println!("✅ Restored original source directory");
    }
    if outcome.config_restored {
        println!("✅ Restored original configuration file");
    }
    Ok(())
}
