//! Version command implementation.

use crate::app::api::{self, VersionOptions};
use crate::domain::AppError;

use super::LayoutArgs;

pub fn run_version(layout: LayoutArgs, libraries: Vec<String>) -> Result<(), AppError> {
    let options = VersionOptions { target_root: layout.target_root, libraries };
    let version = match layout.firmware_root {
        Some(root) => api::version_at(root, options)?,
        None => api::version(options)?,
    };

    println!("{}", version);
    Ok(())
}
