//! Errors from the rendering layer.

use thiserror::Error;

/// Convenience alias for results within the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering output representations.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown format: '{name}'. Available formats: markdown, json, csv")]
    UnknownFormat { name: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
