use crate::models::{CategoryTable, PathMapping};
use crate::organizer::preview::{MissingFile, MoveOperation, PreviewTree};
use crate::utils::compute_file_hash;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a move pass actually did
#[derive(Debug, Clone, Default)]
pub struct MoveOutcome {
    pub moved: Vec<MoveOperation>,
    pub missing: Vec<MissingFile>,
    pub mapping: PathMapping,
}

/// Moves stylesheet files from the flat base directory into category folders
pub struct FileMover {
    base_path: PathBuf,
}

impl FileMover {
    /// Create a new FileMover for the given base directory.
    ///
    /// The directory does not have to exist yet; creating the category
    /// folders creates it.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Plan directory creation and moves for a table, without touching the filesystem
    pub fn plan(&self, table: &CategoryTable) -> PreviewTree {
        let mut preview = PreviewTree::new();

        for category in table.categories() {
            preview.add_directory(&category.name, self.base_path.join(&category.name));
        }

        for (category, file) in table.entries() {
            let source = self.base_path.join(file);
            if source.exists() {
                let destination = self.base_path.join(category).join(file);
                debug!("Planned {} -> {}", source.display(), destination.display());
                preview.add_move(category, file, source, destination);
            } else {
                preview.add_missing(category, file);
            }
        }

        preview
    }

    /// Create every planned category directory. Existing directories are fine.
    pub fn create_directories(&self, preview: &PreviewTree) -> Result<Vec<PathBuf>> {
        let mut created = Vec::with_capacity(preview.directories_to_create.len());
        for dir_op in &preview.directories_to_create {
            fs::create_dir_all(&dir_op.path)
                .with_context(|| format!("Failed to create directory: {}", dir_op.path.display()))?;
            info!("✓ Created folder: {}", dir_op.category);
            created.push(dir_op.path.clone());
        }
        Ok(created)
    }

    /// Move planned files, recording an import mapping entry for each one moved
    pub fn move_files(&self, preview: &PreviewTree, import_prefix: &str) -> Result<MoveOutcome> {
        let mut outcome = MoveOutcome::default();

        for missing in &preview.missing {
            warn!("⚠ File not found: {}", missing.file);
            outcome.missing.push(missing.clone());
        }

        for move_op in &preview.files_to_move {
            // The source may have disappeared since planning
            if !move_op.source.exists() {
                warn!("⚠ File not found: {}", move_op.file);
                outcome.missing.push(MissingFile {
                    category: move_op.category.clone(),
                    file: move_op.file.clone(),
                });
                continue;
            }

            if let Some(parent) = move_op.destination.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create destination directory: {}", parent.display())
                })?;
            }

            move_file(&move_op.source, &move_op.destination)?;
            info!("✓ Moved: {} → {}/", move_op.file, move_op.category);

            outcome
                .mapping
                .record(import_prefix, &move_op.category, &move_op.file);
            outcome.moved.push(move_op.clone());
        }

        Ok(outcome)
    }

    /// Create directories, then move files
    pub fn execute(&self, preview: &PreviewTree, import_prefix: &str) -> Result<MoveOutcome> {
        self.create_directories(preview)?;
        self.move_files(preview, import_prefix)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Rename `source` to `destination`, falling back to copy, verify and delete
/// when they live on different filesystems
pub fn move_file(source: &Path, destination: &Path) -> Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            debug!(
                "Rename across filesystems, copying {} instead",
                source.display()
            );
            copy_then_remove(source, destination)
        }
        Err(err) => Err(err).with_context(|| {
            format!(
                "Failed to move {} to {}",
                source.display(),
                destination.display()
            )
        }),
    }
}

fn copy_then_remove(source: &Path, destination: &Path) -> Result<()> {
    fs::copy(source, destination).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            destination.display()
        )
    })?;

    let source_hash = compute_file_hash(source)?;
    let destination_hash = compute_file_hash(destination)?;
    if source_hash != destination_hash {
        anyhow::bail!(
            "Copy of {} to {} does not match the original",
            source.display(),
            destination.display()
        );
    }

    fs::remove_file(source)
        .with_context(|| format!("Failed to remove original file: {}", source.display()))
}
