use anyhow::{bail, Result};
use colored::Colorize;

use crate::fs::{ProjectStore, StoreError};
use crate::models::project::Mode;
use crate::pipeline::{Clock, Pipeline};

/// Create a new project and persist it, refusing to overwrite an existing one.
pub fn execute<S: ProjectStore, C: Clock>(
    store: &S,
    pipeline: &Pipeline<C>,
    name: String,
    description: String,
    mode: Mode,
) -> Result<()> {
    let name = name.trim().to_string();
    let description = description.trim().to_string();
    if name.is_empty() {
        bail!("project name must not be empty");
    }
    if description.is_empty() {
        bail!("project description must not be empty");
    }

    if store.exists() {
        return Err(StoreError::AlreadyInitialized {
            path: store.location(),
        }
        .into());
    }

    let mut state = pipeline.initialize(name, description, mode);
    store.save(&mut state)?;

    println!(
        "  {} Initialized project {} ({} mode, clarity threshold {})",
        "✓".green().bold(),
        state.name.bold(),
        mode,
        mode.clarity_threshold()
    );
    println!(
        "  Next: write the proposal, then run {}",
        "specgate advance propose".cyan()
    );
    Ok(())
}
