//! Winpkg-Scan CLI - Discovers package declarations in PowerShell setup scripts
//!
//! Provides:
//! - Scanning a script directory into a package catalog (table or JSON)
//! - Per-installer and per-script summaries
//! - Container diagnostics for a single script

mod commands;
mod helpers;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use winpkg_discover::DiscoveryConfig;

use commands::{cmd_blocks, cmd_scan, cmd_summary};

#[derive(Parser)]
#[command(name = "winpkg-scan")]
#[command(about = "Discover winget, choco, scoop, module and sideload installs in PowerShell scripts", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Script enumeration options
#[derive(Args)]
struct SourceArgs {
    /// Directory containing the install scripts
    dir: PathBuf,

    /// Script file name to leave out (repeatable)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Script file extension
    #[arg(long, default_value = "ps1")]
    extension: String,
}

/// Heuristic window sizes, in bytes
#[derive(Args)]
struct WindowArgs {
    /// How far after `$Var.Values |` to look for the install command
    #[arg(long, default_value_t = DiscoveryConfig::DEFAULT_ITERATION_LOOKAHEAD)]
    iteration_window: usize,

    /// How far before `Add-AppxPackage` to look for "Installing <name>"
    #[arg(long, default_value_t = DiscoveryConfig::DEFAULT_SIDELOAD_NAME_LOOKBACK)]
    sideload_name_window: usize,

    /// How far around `Add-AppxPackage` to look for the download URL
    #[arg(long, default_value_t = DiscoveryConfig::DEFAULT_SIDELOAD_URL_WINDOW)]
    sideload_url_window: usize,
}

impl WindowArgs {
    fn config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            iteration_lookahead: self.iteration_window,
            sideload_name_lookback: self.sideload_name_window,
            sideload_url_before: self.sideload_url_window,
            sideload_url_after: self.sideload_url_window,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Lists every package declared in a script directory
    Scan {
        #[command(flatten)]
        sources: SourceArgs,

        #[command(flatten)]
        windows: WindowArgs,

        /// Print the records as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// JSON object mapping package ids to skip reasons
        #[arg(long)]
        skip_list: Option<PathBuf>,
    },

    /// Counts packages per installer and per script
    Summary {
        #[command(flatten)]
        sources: SourceArgs,

        #[command(flatten)]
        windows: WindowArgs,
    },

    /// Shows the container literals in one script and who consumes them
    Blocks {
        /// Script to inspect
        file: PathBuf,

        #[command(flatten)]
        windows: WindowArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    ).init();

    match cli.command {
        Commands::Scan { sources, windows, json, skip_list } => {
            let filter = helpers::source_filter(sources.extension, sources.exclude);
            cmd_scan(sources.dir, filter, windows.config(), json, skip_list)?;
        }
        Commands::Summary { sources, windows } => {
            let filter = helpers::source_filter(sources.extension, sources.exclude);
            cmd_summary(sources.dir, filter, windows.config())?;
        }
        Commands::Blocks { file, windows } => {
            cmd_blocks(file, windows.config())?;
        }
    }

    Ok(())
}
