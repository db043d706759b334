use std::path::{Path, PathBuf};

use crate::models::constants::layout::{DEFAULT_STATE_DIR, STATE_FILE};
use crate::models::stage::Stage;

/// On-disk layout of a project: `<root>/<state_dir>/` holding `sdd.json` and
/// one markdown artifact per stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    state_dir: PathBuf,
}

impl ProjectDir {
    pub fn new<P: AsRef<Path>>(root: P, state_dir: &str) -> Self {
        Self {
            state_dir: root.as_ref().join(state_dir),
        }
    }

    pub fn with_default_layout<P: AsRef<Path>>(root: P) -> Self {
        Self::new(root, DEFAULT_STATE_DIR)
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    pub fn state_file(&self) -> PathBuf {
        self.state_dir.join(STATE_FILE)
    }

    /// Path of the markdown artifact for `stage`, or `None` for stages that
    /// produce no document.
    pub fn artifact_path(&self, stage: Stage) -> Option<PathBuf> {
        stage
            .artifact_filename()
            .map(|filename| self.state_dir.join(filename))
    }
}
