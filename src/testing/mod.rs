mod fake_git;
mod fake_runner;
mod test_trees;

pub use fake_git::FakeGit;
pub use fake_runner::FakeRunner;
pub use test_trees::TestTrees;
