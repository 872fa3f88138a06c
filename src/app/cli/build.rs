//! Build command implementation.

use crate::app::api::{self, BuildOptions};
use crate::domain::{AppError, Variant};

use super::LayoutArgs;

pub fn run_build(
    variant: Variant,
    layout: LayoutArgs,
    libraries: Vec<String>,
) -> Result<(), AppError> {
    let options = BuildOptions { variant, target_root: layout.target_root, libraries };
    let outcome = match layout.firmware_root {
        Some(root) => api::build_at(root, options)?,
        None => api::build(options)?,
    };

    if let Some(version) = &outcome.version {
        println!("🏷️  Version: {}", version);
    }
    match outcome.exit_code {
        Some(0) => println!("✅ Build ({}) finished; target restored", outcome.variant),
        Some(code) => println!(
            "⚠️  Build ({}) exited with status {}; target restored",
            outcome.variant, code
        ),
        None => println!(
            "⚠️  Build ({}) was terminated by a signal; target restored",
            outcome.variant
        ),
    }
    Ok(())
}
