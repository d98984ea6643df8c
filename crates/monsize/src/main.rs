//! monsize CLI - Monitor size comparison.
//!
//! Provides commands for:
//! - `presets`: List built-in monitor presets
//! - `size`: Compare physical sizes of presets and custom monitors
//! - `compare`: Manage the persisted catalog comparison

mod commands;
mod error;
mod output;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CompareArgs, PresetsArgs, SizeArgs};
use output::Output;

/// monsize - Monitor size comparison.
#[derive(Parser)]
#[command(name = "monsize", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover monsize.toml).
    #[arg(short, long, global = true, env = "MONSIZE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output (show skipped monitors and state changes).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in monitor presets.
    Presets(PresetsArgs),
    /// Compare the physical size of monitors.
    Size(SizeArgs),
    /// Manage the catalog comparison.
    Compare(CompareArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Presets(args) => args.execute(),
        Commands::Size(args) => args.execute(config_path),
        Commands::Compare(args) => args.execute(config_path),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
