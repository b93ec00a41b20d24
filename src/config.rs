use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    CONFIG_SEARCH_PATHS, DEFAULT_COMPONENTS_DIR, DEFAULT_ROOT_INDEX, DEFAULT_STYLES_INDEX,
    DEFAULT_STYLES_PREFIX,
};
use crate::models::{Category, CategoryTable, Replacement};
use crate::organizer::Layout;
use crate::utils;

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub imports: ImportsConfig,
    #[serde(default)]
    pub organizer: OrganizerConfig,
    /// Replaces the built-in root index rewrites when present
    #[serde(default)]
    pub root_rewrites: Option<Vec<Replacement>>,
    /// Replaces the built-in category table when present
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// Locations relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
    #[serde(default = "default_styles_index")]
    pub styles_index: String,
    #[serde(default = "default_root_index")]
    pub root_index: String,
}

fn default_components_dir() -> String {
    DEFAULT_COMPONENTS_DIR.to_string()
}

fn default_styles_index() -> String {
    DEFAULT_STYLES_INDEX.to_string()
}

fn default_root_index() -> String {
    DEFAULT_ROOT_INDEX.to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
            styles_index: default_styles_index(),
            root_index: default_root_index(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportsConfig {
    /// Prefix the styles index uses in front of component file names
    #[serde(default = "default_styles_prefix")]
    pub styles_prefix: String,
}

fn default_styles_prefix() -> String {
    DEFAULT_STYLES_PREFIX.to_string()
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            styles_prefix: default_styles_prefix(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrganizerConfig {
    #[serde(default)]
    pub skip_confirmation: bool,
    #[serde(default)]
    pub dry_run_default: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Load from an explicit path, else the first default location that exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for raw in CONFIG_SEARCH_PATHS {
            let path = utils::expand_path(raw)?;
            if path.exists() {
                tracing::debug!("Using config file {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// The configured table, or the built-in one, validated either way
    pub fn category_table(&self) -> Result<CategoryTable> {
        let table = match &self.categories {
            Some(categories) => CategoryTable::new(categories.clone()),
            None => CategoryTable::new(CategoryTable::builtin().categories().to_vec()),
        };
        table.context("Invalid category table")
    }

    pub fn root_rewrites(&self) -> Vec<Replacement> {
        self.root_rewrites
            .clone()
            .unwrap_or_else(Replacement::root_defaults)
    }

    /// Resolve the configured paths against a project root
    pub fn layout(&self, root: &Path) -> Result<Layout> {
        let resolve = |raw: &str| -> Result<_> {
            let path = utils::expand_path(raw)?;
            Ok(if path.is_absolute() { path } else { root.join(path) })
        };

        Ok(Layout {
            components_dir: resolve(&self.paths.components_dir)?,
            styles_index: resolve(&self.paths.styles_index)?,
            root_index: resolve(&self.paths.root_index)?,
            styles_prefix: self.imports.styles_prefix.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.paths.components_dir, "src/styles/components");
        assert_eq!(config.paths.styles_index, "src/styles/index.css");
        assert_eq!(config.paths.root_index, "src/index.css");
        assert_eq!(config.imports.styles_prefix, "./components/");
        assert!(!config.organizer.skip_confirmation);
        assert_eq!(config.category_table().unwrap(), CategoryTable::builtin());
        assert_eq!(config.root_rewrites(), Replacement::root_defaults());
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        std::fs::write(
            &config_path,
            r#"
[paths]
components_dir = "styles/parts"

[organizer]
skip_confirmation = true

[[root_rewrites]]
from = "./styles/parts/a.css"
to = "./styles/parts/base/a.css"

[[categories]]
name = "base"
files = ["a.css", "b.css"]

[[categories]]
name = "chat"
files = ["chat.css"]
"#,
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.paths.components_dir, "styles/parts");
        assert_eq!(config.paths.styles_index, "src/styles/index.css");
        assert!(config.organizer.skip_confirmation);

        let table = config.category_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.categories()[0].name, "base");
        assert_eq!(table.total_files(), 3);

        let rewrites = config.root_rewrites();
        assert_eq!(rewrites.len(), 1);
        assert_eq!(rewrites[0].to, "./styles/parts/base/a.css");
    }

    #[test]
    fn test_config_with_duplicate_file_fails() {
        let config: Config = toml::from_str(
            r#"
[[categories]]
name = "chat"
files = ["shared.css"]

[[categories]]
name = "buttons"
files = ["shared.css"]
"#,
        )
        .unwrap();

        let err = config.category_table().unwrap_err();
        assert!(format!("{err:#}").contains("shared.css"));
    }

    #[test]
    fn test_config_missing_explicit_file() {
        assert!(Config::load(Some(Path::new("/nonexistent/settings.toml"))).is_err());
    }

    #[test]
    fn test_layout_resolves_against_root() {
        let config = Config::default();
        let layout = config.layout(Path::new("/project")).unwrap();
        assert_eq!(
            layout.components_dir,
            PathBuf::from("/project/src/styles/components")
        );
        assert_eq!(layout.styles_index, PathBuf::from("/project/src/styles/index.css"));
        assert_eq!(layout.root_index, PathBuf::from("/project/src/index.css"));
    }

    #[test]
    fn test_layout_keeps_absolute_paths() {
        let mut config = Config::default();
        config.paths.root_index = "/elsewhere/index.css".to_string();
        let layout = config.layout(Path::new("/project")).unwrap();
        assert_eq!(layout.root_index, PathBuf::from("/elsewhere/index.css"));
    }
}
