//! Shared testing harness for `firmata-build` integration tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::git_repository;

/// Build script installed in the target: records what it saw next to the
/// target (so the target itself stays byte-identical) and exits with
/// `$BUILD_EXIT`.
const BUILD_SCRIPT: &str = r#"set -e
out=../observed
rm -rf "$out"
mkdir -p "$out"
cp -R source "$out/source"
if [ -f codal.json ]; then cp codal.json "$out/codal.json"; fi
pwd > "$out/cwd"
exit "${BUILD_EXIT:-0}"
"#;

const DEFAULT_CONFIG: &str = r#"[build]
program = "sh"
args = ["build.sh"]
"#;

/// A firmware checkout next to a `microbit-v2-samples` target, both in a temp dir.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");

        root.child("firmware/source/mbFirmata.cpp").write_str("// firmata\n").unwrap();
        root.child("firmware/source/versions.h").write_str("#pragma once\n").unwrap();
        root.child("firmware/codal.json").write_str("{\"target\":\"firmata\"}\n").unwrap();
        root.child("firmware/firmata-build.toml").write_str(DEFAULT_CONFIG).unwrap();

        root.child("microbit-v2-samples/source/main.cpp").write_str("// samples\n").unwrap();
        root.child("microbit-v2-samples/codal.json").write_str("{\"target\":\"samples\"}\n").unwrap();
        root.child("microbit-v2-samples/build.sh").write_str(BUILD_SCRIPT).unwrap();

        Self { root }
    }

    /// Add `codal-microbit-v2` as a git checkout tagged `tag`.
    pub(crate) fn with_tagged_library(self, tag: &str) -> Self {
        let checkout = self.library_checkout("codal-microbit-v2");
        git_repository::init_with_commit(&checkout);
        git_repository::tag(&checkout, tag);
        self
    }

    /// Add `codal-microbit-v2` as a git checkout without tags.
    pub(crate) fn with_untagged_library(self) -> Self {
        git_repository::init_with_commit(&self.library_checkout("codal-microbit-v2"));
        self
    }

    pub(crate) fn library_checkout(&self, name: &str) -> PathBuf {
        self.target_root().join("libraries").join(name)
    }

    pub(crate) fn firmware_root(&self) -> PathBuf {
        self.root.path().join("firmware")
    }

    pub(crate) fn target_root(&self) -> PathBuf {
        self.root.path().join("microbit-v2-samples")
    }

    /// Where the build script records the tree it was run against.
    pub(crate) fn observed(&self) -> PathBuf {
        self.root.path().join("observed")
    }

    /// Replace the firmware's `firmata-build.toml`.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.firmware_root().join("firmata-build.toml"), content)
            .expect("Failed to write config");
    }

    /// Build a command for invoking the compiled binary from the firmware root.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.firmware_root())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd =
            Command::cargo_bin("firmata-build").expect("Failed to locate firmata-build binary");
        cmd.current_dir(dir.as_ref()).env("RUST_LOG", "info").env_remove("BUILD_EXIT");
        cmd
    }

    /// Contents of every file under `dir`, keyed by relative path.
    pub(crate) fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
        let mut files = BTreeMap::new();
        collect(dir, dir, &mut files);
        files
    }

    /// Snapshot of the target with library checkouts left out.
    pub(crate) fn target_snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        let mut files = Self::snapshot(&self.target_root());
        files.retain(|path, _| !path.starts_with("libraries"));
        files
    }

    pub(crate) fn firmware_snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        Self::snapshot(&self.firmware_root())
    }

    pub(crate) fn read(path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let relative = path.strip_prefix(root).unwrap().to_string_lossy().to_string();
            files.insert(relative, fs::read(&path).expect("Failed to read file"));
        }
    }
}
