use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Represents a file move operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOperation {
    pub category: String,
    pub file: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Represents a directory creation operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDirOperation {
    pub category: String,
    pub path: PathBuf,
}

/// A table entry whose source file was not present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFile {
    pub category: String,
    pub file: String,
}

/// Collection of operations for preview
#[derive(Debug, Clone, Default)]
pub struct PreviewTree {
    pub directories_to_create: Vec<CreateDirOperation>,
    pub files_to_move: Vec<MoveOperation>,
    pub missing: Vec<MissingFile>,
}

impl PreviewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory to be created
    pub fn add_directory(&mut self, category: &str, path: PathBuf) {
        self.directories_to_create.push(CreateDirOperation {
            category: category.to_string(),
            path,
        });
    }

    /// Add a file move operation
    pub fn add_move(&mut self, category: &str, file: &str, source: PathBuf, destination: PathBuf) {
        self.files_to_move.push(MoveOperation {
            category: category.to_string(),
            file: file.to_string(),
            source,
            destination,
        });
    }

    pub fn add_missing(&mut self, category: &str, file: &str) {
        self.missing.push(MissingFile {
            category: category.to_string(),
            file: file.to_string(),
        });
    }

    /// Check if there are any filesystem operations
    pub fn is_empty(&self) -> bool {
        self.directories_to_create.is_empty() && self.files_to_move.is_empty()
    }
}

impl fmt::Display for PreviewTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Proposed changes:")?;

        // Group files by category, keeping every planned directory visible
        let mut by_category: BTreeMap<&str, Vec<&MoveOperation>> = BTreeMap::new();
        for dir_op in &self.directories_to_create {
            by_category.entry(dir_op.category.as_str()).or_default();
        }
        for op in &self.files_to_move {
            by_category.entry(op.category.as_str()).or_default().push(op);
        }

        for (category, moves) in &by_category {
            writeln!(f, "📁 {}/", category)?;
            for op in moves {
                writeln!(f, "  📄 {} (from: {})", op.file, op.source.display())?;
            }
        }

        if !self.missing.is_empty() {
            writeln!(f, "\nNot found (skipped, imports left unchanged):")?;
            for missing in &self.missing {
                writeln!(f, "  ⚠ {} (for {}/)", missing.file, missing.category)?;
            }
        }

        write!(
            f,
            "\nCreate {} directories, move {} files",
            self.directories_to_create.len(),
            self.files_to_move.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_tree_empty() {
        let tree = PreviewTree::new();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_preview_tree_missing_only_is_empty() {
        let mut tree = PreviewTree::new();
        tree.add_missing("training", "missing.css");
        assert!(tree.is_empty());
        assert_eq!(tree.missing.len(), 1);
    }

    #[test]
    fn test_preview_tree_add_operations() {
        let mut tree = PreviewTree::new();
        tree.add_directory("chat", PathBuf::from("/c/chat"));
        tree.add_move(
            "chat",
            "coach-chat.css",
            PathBuf::from("/c/coach-chat.css"),
            PathBuf::from("/c/chat/coach-chat.css"),
        );

        assert!(!tree.is_empty());
        assert_eq!(tree.directories_to_create.len(), 1);
        assert_eq!(tree.files_to_move.len(), 1);
    }

    #[test]
    fn test_preview_tree_display() {
        let mut tree = PreviewTree::new();
        tree.add_directory("chat", PathBuf::from("/c/chat"));
        tree.add_directory("effects", PathBuf::from("/c/effects"));
        tree.add_move(
            "chat",
            "coach-chat.css",
            PathBuf::from("/c/coach-chat.css"),
            PathBuf::from("/c/chat/coach-chat.css"),
        );
        tree.add_move(
            "chat",
            "chat-messages.css",
            PathBuf::from("/c/chat-messages.css"),
            PathBuf::from("/c/chat/chat-messages.css"),
        );
        tree.add_missing("effects", "endurance-map.css");

        let preview = tree.to_string();
        assert!(preview.contains("📁 chat/"));
        assert!(preview.contains("📁 effects/"));
        assert!(preview.contains("coach-chat.css"));
        assert!(preview.contains("chat-messages.css"));
        assert!(preview.contains("⚠ endurance-map.css"));
        assert!(preview.contains("Create 2 directories"));
        assert!(preview.contains("move 2 files"));
    }
}
