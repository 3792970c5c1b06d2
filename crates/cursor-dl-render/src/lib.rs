//! Output renderers for Cursor download link sets.
//!
//! Three independent representations of the same ordered record sequence:
//! a Markdown document with collapsible per-target sections, a nested JSON
//! index, and a flat CSV table. All three consume records in input order
//! and never sort or deduplicate.

pub mod csv;
pub mod error;
pub mod format;
pub mod json;
pub mod markdown;

pub use csv::render as render_csv;
pub use error::RenderError;
pub use format::{render, OutputFormat};
pub use json::{render as render_json, DownloadIndex, VersionEntry};
pub use markdown::render as render_markdown;
