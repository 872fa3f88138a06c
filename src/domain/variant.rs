use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Build procedure variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Stage, build, restore. No config swap, no version stamp, and a failed
    /// launch of the delegated build leaves the target tree staged.
    V1,
    /// Config swap and version stamp; restoration runs on every exit path.
    #[default]
    V2,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::V1 => "v1",
            Variant::V2 => "v2",
        }
    }

    /// Whether the target's configuration file is swapped alongside the source tree.
    pub fn swaps_config(self) -> bool {
        matches!(self, Variant::V2)
    }

    /// Whether the version string is stamped into the staged header.
    pub fn stamps_version(self) -> bool {
        matches!(self, Variant::V2)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(Variant::V1),
            "v2" | "2" => Ok(Variant::V2),
            other => Err(AppError::config_error(format!(
                "Invalid variant '{other}': must be one of v1, v2"
            ))),
        }
    }
}
