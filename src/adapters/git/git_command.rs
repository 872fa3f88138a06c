use crate::domain::AppError;
use crate::domain::version::FATAL_MARKER;
use crate::ports::GitPort;
use git2::Repository;
use std::path::Path;
use std::process::{Command, Output};

/// Git adapter: tag queries through the `git` CLI, object lookups through libgit2.
#[derive(Debug, Clone, Default)]
pub struct GitCommandAdapter;

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run_output(&self, args: &[&str], cwd: &Path) -> Result<Output, AppError> {
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd);

        command.output().map_err(|e| AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: format!("{} (in {})", e, cwd.display()),
        })
    }
}

impl GitPort for GitCommandAdapter {
    fn describe_tags(&self, checkout: &Path) -> Result<String, AppError> {
        let output = self.run_output(&["describe", "--tags"], checkout)?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
        }

        // Callers key the fallback off the marker, so a failed query always carries it.
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.starts_with(FATAL_MARKER) {
            Ok(stderr)
        } else if stderr.is_empty() {
            Ok(format!("{} git describe exited with {}", FATAL_MARKER, output.status))
        } else {
            Ok(format!("{} {}", FATAL_MARKER, stderr))
        }
    }

    fn short_commit(&self, checkout: &Path) -> Result<String, AppError> {
        let repo = Repository::discover(checkout).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.to_string(),
        })?;

        let commit =
            repo.head().and_then(|head| head.peel_to_commit()).map_err(|e| AppError::GitError {
                command: "git2::Repository::head".to_string(),
                details: e.to_string(),
            })?;

        let short = commit.as_object().short_id().map_err(|e| AppError::GitError {
            command: "git2::Object::short_id".to_string(),
            details: e.to_string(),
        })?;

        short.as_str().map(str::to_string).ok_or_else(|| AppError::GitError {
            command: "git2::Object::short_id".to_string(),
            details: "Short id is not valid UTF-8".to_string(),
        })
    }
}
