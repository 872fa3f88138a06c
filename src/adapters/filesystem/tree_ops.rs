use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::domain::AppError;

fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Recursively delete `path`, clearing read-only bits first.
///
/// Returns `false` if nothing was there.
pub fn remove_if_exists(path: &Path) -> Result<bool, AppError> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(false);
    };

    if !metadata.is_dir() {
        if !metadata.file_type().is_symlink() {
            make_writable(path, &metadata)?;
        }
        fs::remove_file(path)?;
        debug!(path = %path.display(), "Removed file");
        return Ok(true);
    }

    for entry in WalkDir::new(path) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.path_is_symlink() {
            continue;
        }
        let metadata = entry.metadata().map_err(io::Error::from)?;
        make_writable(entry.path(), &metadata)?;
    }
    fs::remove_dir_all(path)?;
    debug!(path = %path.display(), "Removed tree");
    Ok(true)
}

/// Rename `src` to `dst`. Returns `false` if `src` is absent.
pub fn rename_if_exists(src: &Path, dst: &Path) -> Result<bool, AppError> {
    if !exists(src) {
        return Ok(false);
    }
    fs::rename(src, dst)?;
    debug!(from = %src.display(), to = %dst.display(), "Renamed");
    Ok(true)
}

/// Copy the directory tree at `src` to `dst`, following symlinks.
///
/// Returns `false` if `src` is absent; fails if `src` is not a directory or
/// `dst` is already occupied.
pub fn copy_tree_if_exists(src: &Path, dst: &Path) -> Result<bool, AppError> {
    if !exists(src) {
        return Ok(false);
    }
    if !src.is_dir() {
        return Err(AppError::InvalidPath(format!("{} is not a directory", src.display())));
    }
    if exists(dst) {
        return Err(AppError::DestinationExists(dst.display().to_string()));
    }

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry.path().strip_prefix(src).map_err(|_| {
            AppError::InvalidPath(format!(
                "{} is not inside {}",
                entry.path().display(),
                src.display()
            ))
        })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    debug!(from = %src.display(), to = %dst.display(), "Copied tree");
    Ok(true)
}

/// Copy a single file. Returns `false` if `src` is absent; fails if `dst` is occupied.
pub fn copy_file_if_exists(src: &Path, dst: &Path) -> Result<bool, AppError> {
    if !exists(src) {
        return Ok(false);
    }
    if exists(dst) {
        return Err(AppError::DestinationExists(dst.display().to_string()));
    }
    fs::copy(src, dst)?;
    debug!(from = %src.display(), to = %dst.display(), "Copied file");
    Ok(true)
}

#[cfg(unix)]
fn make_writable(path: &Path, metadata: &Metadata) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = metadata.permissions();
    let mode = perms.mode();
    if mode & 0o200 == 0 {
        perms.set_mode(mode | 0o200);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn make_writable(path: &Path, metadata: &Metadata) -> Result<(), AppError> {
    let mut perms = metadata.permissions();
    if perms.readonly() {
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}
