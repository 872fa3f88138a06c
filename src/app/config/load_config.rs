//! Build configuration loading from the firmware root.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::build_config::{self, validate_library_name};
use crate::domain::{AppError, BuildConfig, CONFIG_FILE_NAME};

/// Load `firmata-build.toml` from the firmware root, or defaults if it is absent.
pub fn load_config(firmware_root: &Path) -> Result<BuildConfig, AppError> {
    let config_path = firmware_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file; using defaults");
        return Ok(BuildConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    let config = build_config::parse_config_content(&content).map_err(|e| match e {
        AppError::Configuration(message) => {
            AppError::Configuration(format!("{}: {}", config_path.display(), message))
        }
        other => other,
    })?;
    debug!(path = %config_path.display(), "Loaded config file");
    Ok(config)
}

/// Load the configuration and replace the library list when one is given.
pub fn load_config_with_overrides(
    firmware_root: &Path,
    libraries: &[String],
) -> Result<BuildConfig, AppError> {
    let mut config = load_config(firmware_root)?;
    if !libraries.is_empty() {
        for library in libraries {
            validate_library_name(library)?;
        }
        config.version.libraries = libraries.to_vec();
    }
    Ok(config)
}
