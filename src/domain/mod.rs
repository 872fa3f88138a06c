pub mod build_config;
pub mod error;
pub mod layout;
pub mod variant;
pub mod version;

pub use build_config::{
    BuildConfig, BuildSettings, CONFIG_FILE_NAME, LayoutConfig, VersionSettings,
};
pub use error::AppError;
pub use layout::Layout;
pub use variant::Variant;
pub use version::{LibraryVersion, VersionString};
