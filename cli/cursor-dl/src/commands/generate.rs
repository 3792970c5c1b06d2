//! `cursor-dl generate` — parse versions and write all output artifacts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cursor_dl_render::{render_csv, render_json, render_markdown};

use crate::input::load_versions;
use crate::manifest::{
    Manifest, DEFAULT_CSV_NAME, DEFAULT_JSON_NAME, DEFAULT_MARKDOWN_NAME, DEFAULT_OUT_DIR,
};

/// Run the full pipeline and write the three artifacts.
///
/// Existing artifacts are overwritten unconditionally.
pub fn run(
    project_dir: &Path,
    manifest: Option<&Manifest>,
    input: Option<&str>,
    out_dir: Option<&str>,
) -> Result<()> {
    let records = load_versions(project_dir, manifest, input)?;
    println!("Parsed {} versions", records.len());

    // Render all three in memory before the first write, so a parse or
    // render failure leaves no partial artifact set behind.
    let markdown = render_markdown(&records);
    let json = render_json(&records)?;
    let csv = render_csv(&records);

    let out_dir_name = out_dir
        .or_else(|| manifest.map(|m| m.out_dir()))
        .unwrap_or(DEFAULT_OUT_DIR);
    let out_path = project_dir.join(out_dir_name);
    fs::create_dir_all(&out_path).with_context(|| format!("creating {}", out_path.display()))?;

    let markdown_name = manifest
        .map(|m| m.markdown_name())
        .unwrap_or(DEFAULT_MARKDOWN_NAME);
    let json_name = manifest.map(|m| m.json_name()).unwrap_or(DEFAULT_JSON_NAME);
    let csv_name = manifest.map(|m| m.csv_name()).unwrap_or(DEFAULT_CSV_NAME);

    for (name, content) in [
        (markdown_name, &markdown),
        (json_name, &json),
        (csv_name, &csv),
    ] {
        let path = out_path.join(name);
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
