//! `cursor-dl links` — download links for one version.

use std::path::Path;

use anyhow::{bail, Result};
use cursor_dl_core::VersionRecord;

use crate::input::load_versions;
use crate::manifest::Manifest;

/// Print the six download links for the given version.
///
/// When the version appears more than once, the first record in input
/// order wins.
pub fn run(
    project_dir: &Path,
    manifest: Option<&Manifest>,
    version: &str,
    input: Option<&str>,
) -> Result<()> {
    let records = load_versions(project_dir, manifest, input)?;
    let record = match find_record(&records, version) {
        Some(r) => r,
        None => bail!("version '{version}' not found. Use 'cursor-dl list' to see versions."),
    };

    println!("=== {} (build {}) ===", record.version, record.build_id);
    let links = record.download_links();
    for (target, url) in links.entries() {
        let pair = format!("{}/{}", target.platform, target.arch);
        println!("  {pair:<15} {url}");
    }
    Ok(())
}

fn find_record<'a>(records: &'a [VersionRecord], version: &str) -> Option<&'a VersionRecord> {
    records.iter().find(|r| r.version == version)
}
