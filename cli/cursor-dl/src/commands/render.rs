//! `cursor-dl render` — print one output format to stdout.

use std::path::Path;

use anyhow::Result;
use cursor_dl_render::OutputFormat;

use crate::input::load_versions;
use crate::manifest::Manifest;

/// Render the chosen format to stdout.
pub fn run(
    project_dir: &Path,
    manifest: Option<&Manifest>,
    format: &str,
    input: Option<&str>,
) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let records = load_versions(project_dir, manifest, input)?;
    let rendered = cursor_dl_render::render(&records, format)?;

    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
