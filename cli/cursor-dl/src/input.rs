//! Input resolution: versions text from flag, manifest, or built-in sample.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cursor_dl_core::{parse_versions, VersionRecord};

use crate::manifest::Manifest;

/// Built-in sample dataset used when no input file is configured.
pub const SAMPLE_VERSIONS: &str = "\
0.45.11,250207y6nbaw5qc
0.45.10,250205buadkzpea
0.45.9,250202tgstl42dt
";

/// Read and parse version records.
///
/// Resolution order: `--input` flag, then the manifest's input path
/// (relative to the project directory), then the built-in sample.
pub fn load_versions(
    project_dir: &Path,
    manifest: Option<&Manifest>,
    input: Option<&str>,
) -> Result<Vec<VersionRecord>> {
    match resolve_input_path(project_dir, manifest, input) {
        Some(path) => {
            if !path.is_file() {
                bail!(
                    "versions file not found: {}. Run 'cursor-dl init' to create a project.",
                    path.display()
                );
            }
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let records = parse_versions(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(records)
        }
        None => Ok(parse_versions(SAMPLE_VERSIONS)?),
    }
}

/// Resolve the versions file path, if any input is configured.
///
/// A `--input` path is taken as given; a manifest path is relative to the
/// project directory.
fn resolve_input_path(
    project_dir: &Path,
    manifest: Option<&Manifest>,
    input: Option<&str>,
) -> Option<PathBuf> {
    if let Some(path) = input {
        return Some(PathBuf::from(path));
    }
    manifest
        .and_then(|m| m.input_path())
        .map(|p| project_dir.join(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_used_when_nothing_configured() {
        let dir = tempfile::tempdir().unwrap();
        let records = load_versions(dir.path(), None, None).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].version, "0.45.11");
        assert_eq!(records[2].build_id, "250202tgstl42dt");
    }

    #[test]
    fn flag_wins_over_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("from-manifest.txt"), "1.0.0,aaa\n").unwrap();
        std::fs::write(dir.path().join("from-flag.txt"), "2.0.0,bbb\n").unwrap();

        let manifest = Manifest::from_str(
            r#"
[project]
name = "test"

[input]
path = "from-manifest.txt"
"#,
        )
        .unwrap();

        let flag_path = dir.path().join("from-flag.txt");
        let records = load_versions(
            dir.path(),
            Some(&manifest),
            Some(flag_path.to_str().unwrap()),
        )
        .unwrap();
        assert_eq!(records[0].version, "2.0.0");
    }

    #[test]
    fn manifest_path_is_relative_to_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/versions.txt"), "3.0.0,ccc\n").unwrap();

        let manifest = Manifest::from_str(
            r#"
[project]
name = "test"

[input]
path = "data/versions.txt"
"#,
        )
        .unwrap();

        let records = load_versions(dir.path(), Some(&manifest), None).unwrap();
        assert_eq!(records[0].version, "3.0.0");
    }

    #[test]
    fn manifest_without_input_path_falls_back_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::from_str("[project]\nname = \"test\"\n").unwrap();
        let records = load_versions(dir.path(), Some(&manifest), None).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = load_versions(dir.path(), None, Some(missing.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("versions file not found"));
    }

    #[test]
    fn malformed_file_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "0.45.11,aaa\nno comma here\n").unwrap();

        let err = load_versions(dir.path(), None, Some(path.to_str().unwrap())).unwrap_err();
        assert!(format!("{err:#}").contains("expected `version,build_id`"));
    }

    #[test]
    fn sample_parses_cleanly() {
        let records = parse_versions(SAMPLE_VERSIONS).unwrap();
        assert_eq!(records.len(), 3);
    }
}
