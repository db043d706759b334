//! Optional `specgate.toml` settings at the project root.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::constants::layout::{CONFIG_FILE, DEFAULT_STATE_DIR};
use crate::models::project::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory under the project root that holds `sdd.json` and artifacts.
    pub state_dir: String,
    /// Mode used by `init` when none is given on the command line.
    pub default_mode: Mode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_dir: DEFAULT_STATE_DIR.to_string(),
            default_mode: Mode::default(),
        }
    }
}

impl Settings {
    /// Load settings from `<root>/specgate.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
