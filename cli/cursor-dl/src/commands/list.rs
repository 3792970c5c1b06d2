//! `cursor-dl list` — print parsed version records.

use std::path::Path;

use anyhow::Result;

use crate::input::load_versions;
use crate::manifest::Manifest;

/// Print the records, one line each, in input order.
pub fn run(project_dir: &Path, manifest: Option<&Manifest>, input: Option<&str>) -> Result<()> {
    let records = load_versions(project_dir, manifest, input)?;

    println!("{} versions:", records.len());
    println!();
    for record in &records {
        println!("  {:<12} {}", record.version, record.build_id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sample_records() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), None, None).unwrap();
    }

    #[test]
    fn lists_records_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("versions.txt");
        std::fs::write(&path, "1.0.0,abc\n").unwrap();

        run(dir.path(), None, Some(path.to_str().unwrap())).unwrap();
    }
}
