//! `cursor-dl init` — project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::input::SAMPLE_VERSIONS;
use crate::manifest::Manifest;

/// Create a new link archive project at the given path.
///
/// `name` is the project name. The directory `name` is created relative to cwd.
pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);
    create_project(project_dir, name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir).context("creating project directory")?;

    // Generate cursor-dl.toml
    let manifest_content = Manifest::template(name);
    fs::write(project_dir.join("cursor-dl.toml"), &manifest_content)
        .context("writing cursor-dl.toml")?;

    // Seed versions.txt with the sample dataset
    fs::write(project_dir.join("versions.txt"), SAMPLE_VERSIONS)
        .context("writing versions.txt")?;

    // Generate .gitignore
    fs::write(project_dir.join(".gitignore"), "out/\n").context("writing .gitignore")?;

    println!("Created project '{name}'");
    println!("  {name}/cursor-dl.toml");
    println!("  {name}/versions.txt");
    println!("  {name}/.gitignore");
    println!();
    println!("Run 'cursor-dl generate' inside the project to write the archive.");

    Ok(())
}
