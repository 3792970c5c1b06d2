//! Version records and download link generation for Cursor builds.
//!
//! Models one released build as a [`VersionRecord`] parsed from
//! `version,build_id` lines, and derives its fixed set of six platform
//! download links from the constant [`DOWNLOAD_TARGETS`] table.

pub mod links;
pub mod parse;
pub mod record;

pub use links::{
    Arch, DownloadTarget, LinkSet, LinuxLinks, MacLinks, Platform, WindowsLinks, BASE_URL,
    DOWNLOAD_TARGETS,
};
pub use parse::{format_versions, parse_versions, FormatError};
pub use record::VersionRecord;
