//! `cursor-dl.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default output directory name.
pub const DEFAULT_OUT_DIR: &str = "out";
/// Default Markdown document file name, as published.
pub const DEFAULT_MARKDOWN_NAME: &str = "Cursor历史.md";
/// Default JSON index file name.
pub const DEFAULT_JSON_NAME: &str = "cursor_downloads.json";
/// Default CSV table file name.
pub const DEFAULT_CSV_NAME: &str = "cursor_downloads.csv";

/// The top-level manifest structure for a link archive project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Input configuration.
    #[serde(default)]
    pub input: Option<InputConfig>,
    /// Output configuration.
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required).
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Input configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Versions file, relative to the manifest directory.
    #[serde(default)]
    pub path: Option<String>,
}

/// Output configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the manifest directory.
    #[serde(default)]
    pub dir: Option<String>,
    /// Markdown document file name.
    #[serde(default)]
    pub markdown: Option<String>,
    /// JSON index file name.
    #[serde(default)]
    pub json: Option<String>,
    /// CSV table file name.
    #[serde(default)]
    pub csv: Option<String>,
}

impl Manifest {
    /// Search upward from `start_dir` for a `cursor-dl.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("cursor-dl.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: Manifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing cursor-dl.toml")
    }

    /// Input path from the manifest, if configured.
    pub fn input_path(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.path.as_deref())
    }

    /// Output directory name, falling back to the default.
    pub fn out_dir(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.dir.as_deref())
            .unwrap_or(DEFAULT_OUT_DIR)
    }

    /// Markdown document file name, falling back to the default.
    pub fn markdown_name(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.markdown.as_deref())
            .unwrap_or(DEFAULT_MARKDOWN_NAME)
    }

    /// JSON index file name, falling back to the default.
    pub fn json_name(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.json.as_deref())
            .unwrap_or(DEFAULT_JSON_NAME)
    }

    /// CSV table file name, falling back to the default.
    pub fn csv_name(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.csv.as_deref())
            .unwrap_or(DEFAULT_CSV_NAME)
    }

    /// Generate the default template for `cursor-dl init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"

[input]
path = "versions.txt"

[output]
dir = "out"
"#
        )
    }
}
