use std::io;

use thiserror::Error;

/// Library-wide error type for firmata-build operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Path cannot be represented or resolved.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Copy destination is already occupied.
    #[error("Destination already exists: {0}")]
    DestinationExists(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// The delegated build process could not be started.
    #[error("Failed to launch '{command}': {details}")]
    BuildLaunch { command: String, details: String },

    /// Version string construction or header stamping failed.
    #[error("Failed to build! Version stamping failed: {0}")]
    StampFailed(Box<AppError>),

    /// The delegated build failed.
    #[error("Failed to build! Delegated build failed: {0}")]
    DelegateFailed(Box<AppError>),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on failure class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::InvalidPath(_) | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::DestinationExists(_) => io::ErrorKind::AlreadyExists,
            AppError::GitError { .. } | AppError::BuildLaunch { .. } => io::ErrorKind::Other,
            AppError::StampFailed(inner) | AppError::DelegateFailed(inner) => inner.kind(),
        }
    }

    /// True when the error came out of the guarded stamp-and-build step.
    pub fn is_build_failure(&self) -> bool {
        matches!(self, AppError::StampFailed(_) | AppError::DelegateFailed(_))
    }
}
