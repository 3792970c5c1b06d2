//! Line-oriented parsing of `version,build_id` records.

use thiserror::Error;

use crate::record::VersionRecord;

/// A non-blank input line that does not split into exactly two
/// comma-separated fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: expected `version,build_id`, got `{text}`")]
pub struct FormatError {
    /// 1-based line number in the input text.
    pub line: usize,
    /// The offending line, after trimming.
    pub text: String,
}

/// Parse raw text into version records, one `version,build_id` pair per
/// non-blank line, preserving input order.
///
/// Lines are trimmed; lines empty after trimming are skipped. Every other
/// line must contain exactly one comma. Field contents are taken verbatim,
/// with no per-field trimming or format check. The first malformed line
/// fails the whole parse; nothing is salvaged.
pub fn parse_versions(input: &str) -> Result<Vec<VersionRecord>, FormatError> {
    let mut records = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(version), Some(build_id), None) => {
                records.push(VersionRecord::new(version, build_id));
            }
            _ => {
                return Err(FormatError {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }
    Ok(records)
}

/// Serialize records back to `version,build_id` lines, one per record.
///
/// Inverse of [`parse_versions`] for any record list whose fields contain
/// no commas or newlines, which parsed records never do.
pub fn format_versions(records: &[VersionRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.version);
        out.push(',');
        out.push_str(&record.build_id);
        out.push('\n');
    }
    out
}
