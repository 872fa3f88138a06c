use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

use crate::domain::{Layout, LayoutConfig};

/// A firmware checkout beside a `microbit-v2-samples` target, in a temp dir.
pub struct TestTrees {
    _root: TempDir,
    firmware: PathBuf,
    target: PathBuf,
}

impl TestTrees {
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp dir");
        let firmware = root.path().join("firmware");
        let target = root.path().join("microbit-v2-samples");

        let trees = Self { _root: root, firmware, target };
        trees.write_firmware("source/main.cpp", "firmata main");
        trees.write_firmware("source/versions.h", "#pragma once\n");
        trees.write_firmware("codal.json", "{\"target\":\"firmata\"}");
        trees.write_target("source/main.cpp", "samples main");
        trees.write_target("codal.json", "{\"target\":\"samples\"}");
        trees.write_target("build.py", "print('building')\n");
        trees
    }

    pub fn firmware_root(&self) -> &Path {
        &self.firmware
    }

    pub fn target_root(&self) -> &Path {
        &self.target
    }

    /// Default layout: target resolved as `../microbit-v2-samples` from the firmware root.
    pub fn layout(&self) -> Layout {
        Layout::resolve(self.firmware.clone(), None, &LayoutConfig::default())
    }

    pub fn write_firmware(&self, relative: &str, content: &str) {
        write(&self.firmware.join(relative), content);
    }

    pub fn write_target(&self, relative: &str, content: &str) {
        write(&self.target.join(relative), content);
    }

    pub fn read_target(&self, relative: &str) -> String {
        fs::read_to_string(self.target.join(relative)).expect("failed to read target file")
    }

    pub fn snapshot_target(&self) -> BTreeMap<String, Vec<u8>> {
        snapshot(&self.target)
    }

    pub fn snapshot_firmware(&self) -> BTreeMap<String, Vec<u8>> {
        snapshot(&self.firmware)
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("path has a parent")).expect("failed to create dir");
    fs::write(path, content).expect("failed to write file");
}

fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap().to_string_lossy().to_string();
            (relative, fs::read(entry.path()).unwrap())
        })
        .collect()
}
