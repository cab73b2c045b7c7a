use std::path::Path;

use anyhow::{Context, Result};

use pagescroll_core::PagerConfig;

/// Write a default configuration file with every recognized key spelled out.
pub fn run(path: &Path) -> Result<()> {
    let raw = PagerConfig::default().to_raw();
    let content = serde_json::to_string_pretty(&raw)?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
