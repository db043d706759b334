//! Project state persistence
//!
//! Loads and saves [`ProjectState`] as pretty-printed JSON in
//! `<root>/<state_dir>/sdd.json`. The store is the only place that stamps
//! `updated_at`; pipeline operations never touch it.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::fs::locking::{locked_read, locked_write};
use crate::fs::project_dir::ProjectDir;
use crate::models::project::ProjectState;
use crate::models::stage::Stage;
use crate::pipeline::{Clock, SystemClock};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("project not initialized at {} - run `specgate init` first", .path.display())]
    NotInitialized { path: PathBuf },

    #[error("project already initialized at {}", .path.display())]
    AlreadyInitialized { path: PathBuf },
}

/// Load/save access to one project's state.
pub trait ProjectStore {
    /// Read the persisted state.
    ///
    /// Fails with [`StoreError::NotInitialized`] if nothing has been saved yet.
    fn load(&self) -> Result<ProjectState>;

    /// Persist `state`, refreshing its `updated_at` timestamp.
    fn save(&self, state: &mut ProjectState) -> Result<()>;

    fn exists(&self) -> bool;

    /// Where the state lives, for error messages.
    fn location(&self) -> PathBuf;

    /// Where the markdown artifact for `stage` lives, if the stage has one.
    fn artifact_path(&self, stage: Stage) -> Option<PathBuf>;
}

/// Filesystem-backed [`ProjectStore`].
#[derive(Debug, Clone)]
pub struct FileStore<C: Clock = SystemClock> {
    dir: ProjectDir,
    clock: C,
}

impl FileStore<SystemClock> {
    pub fn new(dir: ProjectDir) -> Self {
        Self {
            dir,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> FileStore<C> {
    pub fn with_clock(dir: ProjectDir, clock: C) -> Self {
        Self { dir, clock }
    }

    pub fn dir(&self) -> &ProjectDir {
        &self.dir
    }
}

impl<C: Clock> ProjectStore for FileStore<C> {
    fn load(&self) -> Result<ProjectState> {
        let path = self.dir.state_file();
        if !path.exists() {
            return Err(StoreError::NotInitialized { path }.into());
        }

        let content = locked_read(&path)?;
        let state = parse_state(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        debug!(path = %path.display(), stage = %state.current_stage, "loaded project state");
        Ok(state)
    }

    fn save(&self, state: &mut ProjectState) -> Result<()> {
        let state_dir = self.dir.state_dir();
        fs::create_dir_all(state_dir)
            .with_context(|| format!("Failed to create directory {}", state_dir.display()))?;

        state.updated_at = self.clock.now();
        let content =
            serde_json::to_string_pretty(state).context("Failed to serialize project state")?;

        let path = self.dir.state_file();
        locked_write(&path, &content)?;

        debug!(path = %path.display(), stage = %state.current_stage, "saved project state");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.dir.state_file().exists()
    }

    fn location(&self) -> PathBuf {
        self.dir.state_file()
    }

    fn artifact_path(&self, stage: Stage) -> Option<PathBuf> {
        self.dir.artifact_path(stage)
    }
}

/// Parse persisted state, reporting an unrecognized `current_stage` as a
/// [`PipelineError::UnknownStage`](crate::PipelineError::UnknownStage) the
/// caller can downcast to.
fn parse_state(content: &str) -> Result<ProjectState> {
    let raw: Value = serde_json::from_str(content).context("Invalid JSON")?;

    if let Some(stage) = raw.get("current_stage").and_then(Value::as_str) {
        stage.parse::<Stage>()?;
    }

    Ok(serde_json::from_value(raw)?)
}
