mod build_runner;
mod git;

pub use build_runner::BuildRunner;
pub use git::GitPort;
