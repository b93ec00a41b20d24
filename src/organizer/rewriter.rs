use crate::models::Replacement;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of rewriting one aggregator file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The file was read and (unless dry-run) written back
    Updated { path: PathBuf, replacements: usize },
    /// The file does not exist; nothing was written
    Missing { path: PathBuf },
}

impl RewriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Updated { path, .. } | Self::Missing { path } => path.as_path(),
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    /// Number of occurrences replaced, zero when the file was missing
    pub fn replacements(&self) -> usize {
        match self {
            Self::Updated { replacements, .. } => *replacements,
            Self::Missing { .. } => 0,
        }
    }
}

/// Apply each replacement in order to the whole text
pub fn apply_replacements(text: &str, replacements: &[Replacement]) -> (String, usize) {
    let mut content = text.to_string();
    let mut total = 0;
    for replacement in replacements {
        let (next, count) = replacement.apply(&content);
        content = next;
        total += count;
    }
    (content, total)
}

/// Rewrite import paths in an aggregator file.
///
/// The whole file is read, every replacement applied as a literal substring
/// substitution, and the whole text written back. A missing file is skipped
/// with a warning. With `dry_run` the replacements are only counted.
pub fn rewrite_file(path: &Path, replacements: &[Replacement], dry_run: bool) -> Result<RewriteOutcome> {
    if !path.exists() {
        warn!("⚠ {} not found", path.display());
        return Ok(RewriteOutcome::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read aggregator file: {}", path.display()))?;

    let (rewritten, count) = apply_replacements(&content, replacements);

    if !dry_run {
        fs::write(path, rewritten)
            .with_context(|| format!("Failed to write aggregator file: {}", path.display()))?;
        info!("✓ Updated {} ({} imports rewritten)", path.display(), count);
    }

    Ok(RewriteOutcome::Updated {
        path: path.to_path_buf(),
        replacements: count,
    })
}
