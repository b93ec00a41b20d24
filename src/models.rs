use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::constants::{DEFAULT_CATEGORIES, DEFAULT_ROOT_REWRITES};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("File '{file}' is listed under both '{first}' and '{second}'")]
    DuplicateFile {
        file: String,
        first: String,
        second: String,
    },

    #[error("Category '{0}' is declared more than once")]
    DuplicateCategory(String),

    #[error("Invalid {kind} name: '{name}'")]
    InvalidName { kind: &'static str, name: String },
}

/// A named folder and the stylesheet files that belong in it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub files: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

/// Ordered, validated association of categories to file names.
///
/// Construct with [`CategoryTable::new`], which rejects tables where a file
/// would be claimed by two categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Build a table, failing on duplicate or unsafe names
    pub fn new(categories: Vec<Category>) -> Result<Self, TableError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// The table compiled into the binary
    pub fn builtin() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, files)| {
                Category::new(*name, files.iter().map(|f| f.to_string()).collect())
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum of the per-category list lengths
    pub fn total_files(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }

    /// Every (category, file) pair in table order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|c| {
            c.files
                .iter()
                .map(move |f| (c.name.as_str(), f.as_str()))
        })
    }

    /// Whether `file` appears anywhere in the table
    pub fn contains_file(&self, file: &str) -> bool {
        self.entries().any(|(_, f)| f == file)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(categories: &[Category]) -> Result<(), TableError> {
    let mut seen_categories = HashSet::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for category in categories {
        check_name("category", &category.name)?;
        if !seen_categories.insert(category.name.as_str()) {
            return Err(TableError::DuplicateCategory(category.name.clone()));
        }

        for file in &category.files {
            check_name("file", file)?;
            if let Some(first) = owners.insert(file.as_str(), category.name.as_str()) {
                return Err(TableError::DuplicateFile {
                    file: file.clone(),
                    first: first.to_string(),
                    second: category.name.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Names become single path components under the base directory
fn check_name(kind: &'static str, name: &str) -> Result<(), TableError> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');

    if invalid {
        return Err(TableError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// A literal substring replacement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Replace every occurrence, returning the new text and how many were replaced
    pub fn apply(&self, text: &str) -> (String, usize) {
        if self.from.is_empty() {
            return (text.to_string(), 0);
        }
        let count = text.matches(self.from.as_str()).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        (text.replace(self.from.as_str(), &self.to), count)
    }

    /// The replacements applied to the root index by default
    pub fn root_defaults() -> Vec<Self> {
        DEFAULT_ROOT_REWRITES
            .iter()
            .map(|(from, to)| Self::new(*from, *to))
            .collect()
    }
}

/// Old import path to new import path, one entry per file actually moved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    entries: Vec<Replacement>,
}

impl PathMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the import change for `file` moving into `category`
    pub fn record(&mut self, prefix: &str, category: &str, file: &str) {
        self.entries.push(Replacement::new(
            format!("{prefix}{file}"),
            format!("{prefix}{category}/{file}"),
        ));
    }

    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    /// New import path for an old one, if it was recorded
    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.from == from)
            .map(|r| r.to.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
