use crate::constants::STYLESHEET_EXTENSION;
use crate::models::CategoryTable;
use crate::utils::get_extension;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Stylesheets sitting directly in `base` that no category claims
pub fn find_uncategorized(base: &Path, table: &CategoryTable) -> Result<Vec<PathBuf>> {
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let mut leftovers = Vec::new();
    for entry in WalkDir::new(base).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to scan {}", base.display()))?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }
        if get_extension(path).as_deref() != Some(STYLESHEET_EXTENSION) {
            continue;
        }

        let listed = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|name| table.contains_file(name))
            .unwrap_or(false);
        if !listed {
            leftovers.push(path.to_path_buf());
        }
    }

    Ok(leftovers)
}
