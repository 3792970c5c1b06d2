//! CSV table renderer.

use cursor_dl_core::{VersionRecord, DOWNLOAD_TARGETS};

/// Fixed header row.
const HEADER: &str = "Version,Platform,Architecture,Download URL";

/// Render the records as a flat table, six data rows per record in
/// record-major order, targets in table order within each record.
///
/// Rows are CRLF-terminated. Fields containing a comma, quote, or line
/// break are double-quoted; parsed record fields never contain those, so
/// quoting only triggers on hand-built records.
pub fn render(records: &[VersionRecord]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\r\n");
    for record in records {
        for target in &DOWNLOAD_TARGETS {
            let url = target.url(&record.build_id);
            out.push_str(&escape(&record.version));
            out.push(',');
            out.push_str(target.platform.as_str());
            out.push(',');
            out.push_str(target.arch.as_str());
            out.push(',');
            out.push_str(&escape(&url));
            out.push_str("\r\n");
        }
    }
    out
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
