//! cursor-dl CLI — command-line interface for the Cursor download link
//! generator.

mod commands;
mod input;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use manifest::Manifest;

#[derive(Parser)]
#[command(name = "cursor-dl", version, about = "Cursor download link generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new link archive project
    Init {
        /// Project name
        name: String,
    },
    /// Parse versions and write all output artifacts
    Generate {
        /// Input versions file (default: manifest input path, else built-in sample)
        #[arg(long)]
        input: Option<String>,
        /// Output directory (default: manifest output dir, else out/)
        #[arg(long)]
        out_dir: Option<String>,
    },
    /// Render one output format to stdout
    Render {
        /// Output format (markdown, json, csv)
        #[arg(long)]
        format: String,
        /// Input versions file (default: manifest input path, else built-in sample)
        #[arg(long)]
        input: Option<String>,
    },
    /// List parsed version records
    List {
        /// Input versions file (default: manifest input path, else built-in sample)
        #[arg(long)]
        input: Option<String>,
    },
    /// Show download links for one version
    Links {
        /// Version to look up (first match wins)
        version: String,
        /// Input versions file (default: manifest input path, else built-in sample)
        #[arg(long)]
        input: Option<String>,
    },
    /// Show the download target table
    Targets,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Generate { input, out_dir } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            commands::generate::run(
                &project_dir,
                manifest.as_ref(),
                input.as_deref(),
                out_dir.as_deref(),
            )
        }

        Commands::Render { format, input } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            commands::render::run(&project_dir, manifest.as_ref(), &format, input.as_deref())
        }

        Commands::List { input } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            commands::list::run(&project_dir, manifest.as_ref(), input.as_deref())
        }

        Commands::Links { version, input } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or(cwd);
            commands::links::run(&project_dir, manifest.as_ref(), &version, input.as_deref())
        }

        Commands::Targets => commands::targets::run(),
    }
}

/// Try to load a manifest from the current directory upward. Returns (None, None) if not found.
fn load_manifest_optional(cwd: &Path) -> anyhow::Result<(Option<Manifest>, Option<PathBuf>)> {
    match Manifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}
