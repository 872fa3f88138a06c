//! Build configuration models and pure parse/validate for `firmata-build.toml`.

use serde::Deserialize;

use crate::domain::AppError;

/// File name of the optional configuration file in the firmware root.
pub const CONFIG_FILE_NAME: &str = "firmata-build.toml";

/// Configuration loaded from `firmata-build.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory names of the staged trees.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Delegated build entry point.
    #[serde(default)]
    pub build: BuildSettings,
    /// Version stamping settings.
    #[serde(default)]
    pub version: VersionSettings,
}

/// Working tree layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Target project root, relative to the firmware root unless absolute.
    #[serde(default = "default_target_root")]
    pub target_root: String,
    /// Default source directory name, shared by both trees.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Name the target's source directory is moved to while staged.
    #[serde(default = "default_staging_dir")]
    pub staging_dir: String,
    /// Configuration file swapped in variant 2.
    #[serde(default = "default_config_file")]
    pub config_file: String,
    /// Name the target's configuration file is moved to while staged.
    #[serde(default = "default_config_backup")]
    pub config_backup: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            target_root: default_target_root(),
            source_dir: default_source_dir(),
            staging_dir: default_staging_dir(),
            config_file: default_config_file(),
            config_backup: default_config_backup(),
        }
    }
}

fn default_target_root() -> String {
    "../microbit-v2-samples".to_string()
}

fn default_source_dir() -> String {
    "source".to_string()
}

fn default_staging_dir() -> String {
    "notsource".to_string()
}

fn default_config_file() -> String {
    "codal.json".to_string()
}

fn default_config_backup() -> String {
    "notcodal.json".to_string()
}

/// Delegated build invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSettings {
    /// Program to run in the target root.
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments passed to the program.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self { program: default_program(), args: default_args() }
    }
}

impl BuildSettings {
    /// Human-readable command line, used in logs and errors.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn default_program() -> String {
    "python3".to_string()
}

fn default_args() -> Vec<String> {
    vec!["build.py".to_string()]
}

/// Version stamping settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionSettings {
    /// Directory under the target root holding library checkouts.
    #[serde(default = "default_libraries_dir")]
    pub libraries_dir: String,
    /// Embedded libraries whose versions are reported, in order.
    #[serde(default = "default_libraries")]
    pub libraries: Vec<String>,
    /// Header in the staged source tree receiving the definition.
    #[serde(default = "default_header")]
    pub header: String,
    /// Preprocessor symbol carrying the version string.
    #[serde(default = "default_define")]
    pub define: String,
}

impl Default for VersionSettings {
    fn default() -> Self {
        Self {
            libraries_dir: default_libraries_dir(),
            libraries: default_libraries(),
            header: default_header(),
            define: default_define(),
        }
    }
}

fn default_libraries_dir() -> String {
    "libraries".to_string()
}

fn default_libraries() -> Vec<String> {
    vec!["codal-microbit-v2".to_string()]
}

fn default_header() -> String {
    "versions.h".to_string()
}

fn default_define() -> String {
    "CODAL_FIRMATA_VERSION_STRING".to_string()
}

impl BuildConfig {
    /// Validate names and the build entry point.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.layout.target_root.trim().is_empty() {
            return Err(AppError::config_error("layout.target_root must not be empty"));
        }

        let layout = &self.layout;
        for (key, value) in [
            ("layout.source_dir", &layout.source_dir),
            ("layout.staging_dir", &layout.staging_dir),
            ("layout.config_file", &layout.config_file),
            ("layout.config_backup", &layout.config_backup),
            ("version.libraries_dir", &self.version.libraries_dir),
            ("version.header", &self.version.header),
        ] {
            validate_entry_name(key, value)?;
        }

        if layout.source_dir == layout.staging_dir {
            return Err(AppError::config_error(
                "layout.staging_dir must differ from layout.source_dir",
            ));
        }
        if layout.config_file == layout.config_backup {
            return Err(AppError::config_error(
                "layout.config_backup must differ from layout.config_file",
            ));
        }

        if self.build.program.trim().is_empty() {
            return Err(AppError::config_error("build.program must not be empty"));
        }

        for library in &self.version.libraries {
            validate_library_name(library)?;
        }
        validate_define(&self.version.define)
    }
}

/// A single path component: non-empty, no separators, not `.` or `..`.
pub fn validate_entry_name(key: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(AppError::config_error(format!(
            "{key} must be a single directory entry name, got '{value}'"
        )));
    }
    Ok(())
}

/// Library names become both a path component and part of the version string.
pub fn validate_library_name(name: &str) -> Result<(), AppError> {
    validate_entry_name("version.libraries", name)?;
    if name.contains(['=', ';', '"']) {
        return Err(AppError::config_error(format!(
            "Library name '{name}' must not contain '=', ';' or '\"'"
        )));
    }
    Ok(())
}

fn validate_define(define: &str) -> Result<(), AppError> {
    let mut chars = define.chars();
    let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::config_error(format!(
            "version.define '{define}' is not a valid preprocessor identifier"
        )));
    }
    Ok(())
}

/// Parse and validate build configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BuildConfig, AppError> {
    let config: BuildConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
