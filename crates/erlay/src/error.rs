//! Error types for erlay operations.
//!
//! Layout itself is total over well-formed input. Every variant here is an
//! input or configuration problem detected before any placement work starts.

use thiserror::Error;

/// The main error type for erlay operations.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Duplicate node id `{id}`")]
    DuplicateNode { id: String },

    #[error("Node `{id}` has an empty size ({width}x{height})")]
    EmptySize { id: String, width: u32, height: u32 },

    #[error("Unknown node `{id}`")]
    UnknownNode { id: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LayoutError {
    /// Create a new `InvalidConfig` error from any displayable message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
