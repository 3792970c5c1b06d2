//! `cursor-dl targets` — the fixed download target table.

use anyhow::Result;
use cursor_dl_core::{BASE_URL, DOWNLOAD_TARGETS};

/// Print the download target table.
pub fn run() -> Result<()> {
    println!("Download targets:");
    println!();
    for target in &DOWNLOAD_TARGETS {
        println!(
            "  {:<10} {:<10} {}",
            target.platform.as_str(),
            target.arch.as_str(),
            target.suffix
        );
    }
    println!();
    println!("URLs are formed as {BASE_URL}/<build_id><suffix>");
    Ok(())
}
