//! CLI logic for the erlay layout tool.
//!
//! Reads a TOML graph document, lays it out with the configured strategy
//! and writes the resulting positions and canvas size as a TOML report.

pub mod document;
pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::Args;
pub use config::ConfigError;
pub use error::ErlayCliError;

use std::fs;

use log::info;

use document::{GraphDocument, LayoutReport};

/// Run the erlay CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ErlayCliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Graph document errors
/// - Layout errors
/// - Report serialization errors
pub fn run(args: &Args) -> Result<(), ErlayCliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(strategy) = args.strategy {
        let layout = app_config.layout().clone().with_strategy(strategy);
        app_config = app_config.with_layout(layout);
    }

    // Read input file
    let source = fs::read_to_string(&args.input)?;
    let document = GraphDocument::parse(&args.input, &source)?;
    info!(
        nodes = document.node_count(),
        edges = document.edge_count(),
        strategy:% = app_config.layout().strategy();
        "Graph document loaded"
    );

    let board = document.into_board(app_config)?;
    let report = LayoutReport::from_board(&board);

    // Write output file
    fs::write(&args.output, report.to_toml()?)?;

    info!(
        output_file = args.output,
        width = report.canvas.width,
        height = report.canvas.height;
        "Layout report written"
    );

    Ok(())
}
