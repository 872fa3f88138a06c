//! Codal version string construction.

use std::fmt;

use crate::domain::AppError;

/// Prefix git prints when a query cannot be answered.
pub const FATAL_MARKER: &str = "fatal:";

/// Pick the tag-describe output unless it reports failure, in which case
/// the fallback query supplies the version.
pub fn select_version<F>(describe_output: &str, fallback: F) -> Result<String, AppError>
where
    F: FnOnce() -> Result<String, AppError>,
{
    if describe_output.starts_with(FATAL_MARKER) { fallback() } else { Ok(describe_output.to_string()) }
}

/// Version of one embedded library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryVersion {
    pub name: String,
    pub version: String,
}

impl LibraryVersion {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into() }
    }
}

/// Semicolon-delimited `name=version` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString(String);

impl VersionString {
    pub fn join(libraries: &[LibraryVersion]) -> Self {
        let joined = libraries
            .iter()
            .map(|library| format!("{}={}", library.name, library.version))
            .collect::<Vec<_>>()
            .join(";");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Preprocessor line defining `symbol` as this string, without a trailing newline.
    pub fn define_line(&self, symbol: &str) -> String {
        let escaped = self.0.replace('\\', "\\\\").replace('"', "\\\"");
        format!("#define {symbol} \"{escaped}\"")
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Header content with `line` appended on a line of its own.
pub fn append_line(existing: &str, line: &str) -> String {
    let mut content = String::with_capacity(existing.len() + line.len() + 2);
    content.push_str(existing);
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(line);
    content.push('\n');
    content
}
