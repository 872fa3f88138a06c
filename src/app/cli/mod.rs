//! CLI Adapter.

mod build;
mod restore;
mod version;

use crate::domain::{AppError, Variant};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "firmata-build")]
#[command(version)]
#[command(
    about = "Stage micro:bit Firmata firmware into a CODAL project and build it",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the firmware and the target project live.
#[derive(Args, Debug, Clone)]
pub(crate) struct LayoutArgs {
    /// Firmware checkout holding `source/` (defaults to the current directory)
    #[arg(short = 'f', long)]
    firmware_root: Option<PathBuf>,
    /// CODAL project to build in (defaults to `../microbit-v2-samples`)
    #[arg(short = 't', long)]
    target_root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Swap the firmware source into the target, build, and restore
    #[clap(visible_alias = "b")]
    Build {
        /// Build procedure: v1 (source only) or v2 (config swap and version stamp)
        #[arg(long, default_value = "v2")]
        variant: Variant,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Embedded library to report in the version string (repeatable)
        #[arg(short = 'l', long = "library")]
        libraries: Vec<String>,
    },
    /// Print the codal version string without building
    #[clap(visible_alias = "v")]
    Version {
        #[command(flatten)]
        layout: LayoutArgs,
        /// Embedded library to report (repeatable)
        #[arg(short = 'l', long = "library")]
        libraries: Vec<String>,
    },
    /// Put back a target source tree left staged by an interrupted build
    #[clap(visible_alias = "r")]
    Restore {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Build { variant, layout, libraries } => {
            build::run_build(variant, layout, libraries)
        }
        Commands::Version { layout, libraries } => version::run_version(layout, libraries),
        Commands::Restore { layout } => restore::run_restore(layout),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}
