//! Command-line argument definitions for the erlay CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, strategy override, and logging verbosity.

use clap::Parser;

use erlay::StrategyKind;

/// Command-line arguments for the erlay layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph document (TOML)
    #[arg(help = "Path to the input graph document")]
    pub input: String,

    /// Path to the output layout report (TOML)
    #[arg(short, long, default_value = "layout.toml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Layout strategy, overriding the configuration (force, hierarchical)
    #[arg(short, long)]
    pub strategy: Option<StrategyKind>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
