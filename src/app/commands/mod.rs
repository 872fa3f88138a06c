pub mod build;
pub mod restore;
pub mod version;
