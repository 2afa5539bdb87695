//! Error types for the erlay CLI.

use std::{io, ops::Range, path::PathBuf};

use thiserror::Error;

use erlay::LayoutError;

use crate::config::ConfigError;

/// The main error type for CLI runs.
#[derive(Debug, Error)]
pub enum ErlayCliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid graph document {}: {message}", path.display())]
    Document {
        path: PathBuf,
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Failed to write layout report: {0}")]
    Report(String),
}

impl ErlayCliError {
    /// Create a document error from a TOML deserialization failure.
    pub fn new_document_error(path: impl Into<PathBuf>, err: &toml::de::Error, src: &str) -> Self {
        Self::Document {
            path: path.into(),
            message: err.message().to_string(),
            span: err.span(),
            src: src.to_string(),
        }
    }
}
