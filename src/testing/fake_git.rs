use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

/// Git double keyed by checkout path.
///
/// Checkouts without a configured description answer like an untagged
/// repository; checkouts without a configured commit fail the fallback.
#[derive(Default)]
pub struct FakeGit {
    describe: Mutex<HashMap<PathBuf, String>>,
    commits: Mutex<HashMap<PathBuf, String>>,
    pub queried: Mutex<Vec<PathBuf>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_describe(self, checkout: impl Into<PathBuf>, output: &str) -> Self {
        self.describe.lock().unwrap().insert(checkout.into(), output.to_string());
        self
    }

    pub fn with_commit(self, checkout: impl Into<PathBuf>, sha: &str) -> Self {
        self.commits.lock().unwrap().insert(checkout.into(), sha.to_string());
        self
    }
}

impl GitPort for FakeGit {
    fn describe_tags(&self, checkout: &Path) -> Result<String, AppError> {
        self.queried.lock().unwrap().push(checkout.to_path_buf());
        Ok(self
            .describe
            .lock()
            .unwrap()
            .get(checkout)
            .cloned()
            .unwrap_or_else(|| "fatal: No names found, cannot describe anything.".to_string()))
    }

    fn short_commit(&self, checkout: &Path) -> Result<String, AppError> {
        self.commits.lock().unwrap().get(checkout).cloned().ok_or_else(|| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: format!("could not find repository at '{}'", checkout.display()),
        })
    }
}
