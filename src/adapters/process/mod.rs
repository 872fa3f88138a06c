mod build_command;

pub use build_command::ProcessBuildRunner;
