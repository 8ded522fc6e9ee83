use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PagerError;
use crate::layout::{GridSpan, Orientation, PageConfig, PageIndexPolicy};
use crate::result::PagerResult;

/// Default grid shape, read from `config.toml`:
///
/// ```toml
/// rows = 2
/// columns = 4
/// orientation = "horizontal"
/// index_policy = "first-visible"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerSettings {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub index_policy: PageIndexPolicy,
}

const CONFIG_DIR: &str = "pager";
const CONFIG_FILE: &str = "config.toml";

fn default_rows() -> usize {
    3
}

fn default_columns() -> usize {
    2
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            orientation: Orientation::default(),
            index_policy: PageIndexPolicy::default(),
        }
    }
}

impl PagerSettings {
    /// `pager/config.toml` under `~/.config` on macOS and the platform
    /// config directory elsewhere.
    pub fn config_path() -> Option<PathBuf> {
        let base = if cfg!(target_os = "macos") {
            dirs::home_dir().map(|home| home.join(".config"))
        } else {
            dirs::config_dir()
        };
        base.map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the user's settings from [`config_path`](Self::config_path).
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Settings from `path`, or defaults when the file is missing, does not
    /// parse, or describes an invalid grid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let settings = match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring pager config {}: {}", path.display(), e);
                return Self::default();
            }
        };
        if let Err(e) = settings.page_config() {
            tracing::warn!("Ignoring pager config {}: {}", path.display(), e);
            return Self::default();
        }
        settings
    }

    /// Reads and parses `path`, reporting IO and parse errors.
    pub fn load_from(path: &Path) -> PagerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses settings; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> PagerResult<Self> {
        toml::from_str(content).map_err(|e| PagerError::Config(e.to_string()))
    }

    /// Validated page configuration for these settings.
    pub fn page_config(&self) -> PagerResult<PageConfig> {
        let span = GridSpan::new(self.rows, self.columns)?;
        Ok(PageConfig::new(span, self.orientation))
    }
}
