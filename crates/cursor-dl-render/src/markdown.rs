//! Markdown document renderer.
//!
//! Reproduces the published download document: six collapsible sections in
//! target table order, one table row per record, and a fixed trailing style
//! block. All static text is byte-for-byte constant across runs.

use cursor_dl_core::{VersionRecord, DOWNLOAD_TARGETS};

/// Table header shared by all six sections.
const TABLE_HEADER: &str = "| 版本 | 下载链接 |\n|------|----------|\n";

/// Closes a section's collapsible panel.
const SECTION_CLOSE: &str = "\n</details>\n\n";

/// Section headings, index-aligned with [`DOWNLOAD_TARGETS`].
/// Heading text is reproduced exactly as published, the trailing space
/// after the Windows "## ARM64 " included.
const SECTION_HEADINGS: [&str; 6] = [
    "# 🖥️ Windows\n\n## x64\n<details>\n<summary style=\"font-size:1.2em\">📦 Windows x64 安装包</summary>\n\n",
    "## ARM64 \n<details>\n<summary style=\"font-size:1.2em\">📱 Windows ARM64 安装包</summary>\n\n",
    "# 🍎 macOS\n\n## Universal\n<details>\n<summary style=\"font-size:1.2em\">🎯 macOS Universal 安装包</summary>\n\n",
    "## ARM64\n<details>\n<summary style=\"font-size:1.2em\">💪 macOS ARM64 安装包</summary>\n\n",
    "## Intel\n<details>\n<summary style=\"font-size:1.2em\">💻 macOS Intel 安装包</summary>\n\n",
    "# 🐧 Linux\n\n## x64\n<details>\n<summary style=\"font-size:1.2em\">🎮 Linux x64 AppImage</summary>\n\n",
];

/// Static style block appended after the last section.
const STYLE_BLOCK: &str = "<style>
details {
    margin: 1em 0;
    padding: 0.5em 1em;
    background: #f8f9fa;
    border-radius: 8px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

summary {
    cursor: pointer;
    font-weight: bold;
    margin: -0.5em -1em;
    padding: 0.5em 1em;
}

summary:hover {
    background: #f1f3f5;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin-top: 1em;
}

th, td {
    padding: 0.5em;
    text-align: left;
    border-bottom: 1px solid #dee2e6;
}

tr:hover {
    background: #f1f3f5;
}

a {
    color: #0366d6;
    text-decoration: none;
}

a:hover {
    text-decoration: underline;
}
</style>
";

/// Render the full download document for the given records.
///
/// Sections always appear, record rows or not; an empty record list yields
/// the document skeleton with six empty tables.
pub fn render(records: &[VersionRecord]) -> String {
    let mut md = String::new();
    for (i, target) in DOWNLOAD_TARGETS.iter().enumerate() {
        if i > 0 {
            md.push_str(SECTION_CLOSE);
        }
        md.push_str(SECTION_HEADINGS[i]);
        md.push_str(TABLE_HEADER);
        for record in records {
            let url = target.url(&record.build_id);
            md.push_str(&format!("| {} | [下载]({url}) |\n", record.version));
        }
    }
    md.push_str(SECTION_CLOSE);
    md.push_str(STYLE_BLOCK);
    md
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<VersionRecord> {
        vec![
            VersionRecord::new("0.45.11", "250207y6nbaw5qc"),
            VersionRecord::new("0.45.10", "250205buadkzpea"),
        ]
    }

    #[test]
    fn document_structure() {
        let md = render(&sample_records());
        assert!(md.starts_with("# 🖥️ Windows\n"));
        assert!(md.ends_with("</style>\n"));
        assert_eq!(md.matches("<details>").count(), 6);
        assert_eq!(md.matches("</details>").count(), 6);
        assert_eq!(md.matches(TABLE_HEADER).count(), 6);
    }

    #[test]
    fn sections_follow_target_order() {
        let md = render(&sample_records());
        let positions: Vec<usize> = [
            "📦 Windows x64",
            "📱 Windows ARM64",
            "🎯 macOS Universal",
            "💪 macOS ARM64",
            "💻 macOS Intel",
            "🎮 Linux x64",
        ]
        .iter()
        .map(|label| md.find(label).unwrap())
        .collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn rows_render_in_input_order() {
        let md = render(&sample_records());
        assert!(md.contains(
            "| 0.45.11 | [下载](https://downloader.cursor.sh/builds/250207y6nbaw5qc/windows/nsis/x64) |\n"
        ));
        let first = md.find("| 0.45.11 |").unwrap();
        let second = md.find("| 0.45.10 |").unwrap();
        assert!(first < second);
    }

    #[test]
    fn one_row_per_record_per_section() {
        let md = render(&sample_records());
        assert_eq!(md.matches("[下载](").count(), 12);
        assert_eq!(md.matches("| 0.45.11 |").count(), 6);
    }

    #[test]
    fn windows_arm64_heading_keeps_trailing_space() {
        let md = render(&sample_records());
        assert!(md.contains("## ARM64 \n<details>"));
        assert!(md.contains("## ARM64\n<details>"));
    }

    #[test]
    fn empty_input_renders_skeleton() {
        let md = render(&[]);
        assert_eq!(md.matches("<details>").count(), 6);
        assert_eq!(md.matches("[下载](").count(), 0);
        assert!(md.ends_with("</style>\n"));
    }

    #[test]
    fn static_text_is_stable() {
        let a = render(&[]);
        let b = render(&[]);
        assert_eq!(a, b);
    }
}
