//! Idempotent filesystem operations used to swap trees in and out of the target.
//!
//! Each operation tolerates an absent source and reports whether it changed
//! anything, so staging and restoring can be re-run over a partially swapped
//! layout.

mod tree_ops;

pub use tree_ops::{copy_file_if_exists, copy_tree_if_exists, remove_if_exists, rename_if_exists};
