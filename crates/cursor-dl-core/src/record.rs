//! Version record value type.

use serde::{Deserialize, Serialize};

use crate::links::LinkSet;

/// One released build: a human-facing version string plus the opaque build
/// ID its download URLs embed.
///
/// Both fields are free-form text. Nothing enforces uniqueness; duplicate
/// records pass through the pipeline unmodified, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Dotted release version, e.g. "0.45.11".
    pub version: String,
    /// Build identifier interpolated verbatim into download URLs.
    pub build_id: String,
}

impl VersionRecord {
    pub fn new(version: impl Into<String>, build_id: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            build_id: build_id.into(),
        }
    }

    /// Derive the download links for this record's build.
    ///
    /// Recomputed on each call; the returned value is independent of the
    /// record.
    pub fn download_links(&self) -> LinkSet {
        LinkSet::for_build(&self.build_id)
    }
}
