//! JSON index renderer.

use cursor_dl_core::{LinkSet, VersionRecord};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Top-level shape of the JSON index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadIndex {
    pub versions: Vec<VersionEntry>,
}

/// One index entry: the record's fields plus its derived links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: String,
    pub build_id: String,
    pub downloads: LinkSet,
}

impl DownloadIndex {
    /// Build the index from records, preserving input order.
    pub fn from_records(records: &[VersionRecord]) -> Self {
        let versions = records
            .iter()
            .map(|r| VersionEntry {
                version: r.version.clone(),
                build_id: r.build_id.clone(),
                downloads: r.download_links(),
            })
            .collect();
        Self { versions }
    }
}

/// Render the records as the pretty-printed JSON index.
///
/// Two-space indentation; non-ASCII text is emitted verbatim, never
/// escaped.
pub fn render(records: &[VersionRecord]) -> Result<String, RenderError> {
    let index = DownloadIndex::from_records(records);
    Ok(serde_json::to_string_pretty(&index)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample_records() -> Vec<VersionRecord> {
        vec![
            VersionRecord::new("0.45.11", "250207y6nbaw5qc"),
            VersionRecord::new("0.45.10", "250205buadkzpea"),
        ]
    }

    #[test]
    fn index_preserves_input_order() {
        let index = DownloadIndex::from_records(&sample_records());
        assert_eq!(index.versions.len(), 2);
        assert_eq!(index.versions[0].version, "0.45.11");
        assert_eq!(index.versions[1].version, "0.45.10");
    }

    #[test]
    fn entry_carries_derived_links() {
        let index = DownloadIndex::from_records(&sample_records());
        assert_eq!(
            index.versions[0].downloads.windows.x64,
            "https://downloader.cursor.sh/builds/250207y6nbaw5qc/windows/nsis/x64"
        );
    }

    #[test]
    fn rendered_output_reparses() {
        let json = render(&sample_records()).unwrap();
        let parsed: DownloadIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DownloadIndex::from_records(&sample_records()));
    }

    #[test]
    fn nested_shape() {
        let json = render(&sample_records()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["versions"].as_array().unwrap().len(), 2);
        assert_eq!(
            value["versions"][1]["downloads"]["mac"]["universal"],
            "https://downloader.cursor.sh/builds/250205buadkzpea/mac/installer/universal"
        );
        assert_eq!(value["versions"][0]["build_id"], "250207y6nbaw5qc");
    }

    #[test]
    fn pretty_printed_with_two_space_indent() {
        let json = render(&sample_records()).unwrap();
        assert!(json.starts_with("{\n  \"versions\": [\n"));
    }

    #[test]
    fn empty_input_renders_empty_index() {
        let json = render(&[]).unwrap();
        assert_eq!(json, "{\n  \"versions\": []\n}");
    }

    #[test]
    fn non_ascii_passes_through_unescaped() {
        let records = vec![VersionRecord::new("0.1-预览", "abc")];
        let json = render(&records).unwrap();
        assert!(json.contains("0.1-预览"));
        assert!(!json.contains("\\u"));
    }
}
