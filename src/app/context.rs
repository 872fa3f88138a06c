use crate::ports::{BuildRunner, GitPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GitPort, R: BuildRunner> {
    git: G,
    runner: R,
}

impl<G: GitPort, R: BuildRunner> AppContext<G, R> {
    /// Create a new application context.
    pub fn new(git: G, runner: R) -> Self {
        Self { git, runner }
    }

    /// Get a reference to the version-control adapter.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Get a reference to the delegated build runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
