//! Output format selection and dispatch.

use cursor_dl_core::VersionRecord;

use crate::error::RenderError;
use crate::{csv, json, markdown};

/// The output representation to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse an output format from a string.
    pub fn parse(s: &str) -> Result<Self, RenderError> {
        match s {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(RenderError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }

    /// Display name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Render the records in the requested format.
pub fn render(records: &[VersionRecord], format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Markdown => Ok(markdown::render(records)),
        OutputFormat::Json => json::render(records),
        OutputFormat::Csv => Ok(csv::render(records)),
    }
}
