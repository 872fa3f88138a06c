use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use walkdir::WalkDir;

use crate::domain::{AppError, BuildSettings};
use crate::ports::BuildRunner;

#[derive(Debug, Clone, Copy)]
pub enum RunnerBehavior {
    Exit(i32),
    FailToLaunch,
}

/// What the delegated build saw when it was invoked.
#[derive(Debug, Clone)]
pub struct RunnerCall {
    pub command: String,
    pub cwd: PathBuf,
    pub staged_files: Vec<String>,
    pub header: Option<String>,
}

pub struct FakeRunner {
    behavior: RunnerBehavior,
    pub calls: Mutex<Vec<RunnerCall>>,
}

impl FakeRunner {
    pub fn exiting(code: i32) -> Self {
        Self { behavior: RunnerBehavior::Exit(code), calls: Mutex::new(Vec::new()) }
    }

    pub fn failing_to_launch() -> Self {
        Self { behavior: RunnerBehavior::FailToLaunch, calls: Mutex::new(Vec::new()) }
    }

    pub fn single_call(&self) -> RunnerCall {
        let calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "expected exactly one delegated build");
        calls[0].clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry.path().strip_prefix(root).ok().map(|p| p.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    files.sort();
    files
}

impl BuildRunner for FakeRunner {
    fn run(&self, settings: &BuildSettings, cwd: &Path) -> Result<Option<i32>, AppError> {
        let source = cwd.join("source");
        self.calls.lock().unwrap().push(RunnerCall {
            command: settings.command_line(),
            cwd: cwd.to_path_buf(),
            staged_files: list_files(&source),
            header: fs::read_to_string(source.join("versions.h")).ok(),
        });

        match self.behavior {
            RunnerBehavior::Exit(code) => Ok(Some(code)),
            RunnerBehavior::FailToLaunch => Err(AppError::BuildLaunch {
                command: settings.command_line(),
                details: "No such file or directory (os error 2)".to_string(),
            }),
        }
    }
}
