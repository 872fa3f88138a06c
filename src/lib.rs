//! firmata-build: stage micro:bit Firmata firmware into a CODAL project tree,
//! delegate the build, and restore the tree afterward.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BuildOptions, BuildOutcome, RestoreOptions, RestoreOutcome, VersionOptions, build, build_at,
    restore, restore_at, version, version_at,
};
pub use domain::{AppError, Variant, VersionString};
