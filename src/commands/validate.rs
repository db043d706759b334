use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;

use crate::fs::ProjectStore;
use crate::models::stage::{Stage, STAGE_ORDER};
use crate::pipeline::{require_stage, Clock, Pipeline};

/// Record the final validation round and close out the pipeline.
///
/// Refuses to complete while any earlier stage's artifact is missing or
/// empty. The state is left untouched in that case.
pub fn execute<S: ProjectStore, C: Clock>(store: &S, pipeline: &Pipeline<C>) -> Result<()> {
    let mut state = store.load()?;
    require_stage(&state, Stage::Validate)?;
    check_artifacts(store)?;

    pipeline.mark_in_progress(&mut state);
    pipeline.complete_final_stage(&mut state)?;
    store.save(&mut state)?;

    println!(
        "  {} Pipeline complete for {}",
        "✓".green().bold(),
        state.name.bold()
    );
    Ok(())
}

fn check_artifacts<S: ProjectStore>(store: &S) -> Result<()> {
    for stage in STAGE_ORDER.iter().copied().filter(|s| !s.is_final()) {
        let Some(path) = store.artifact_path(stage) else {
            continue;
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {stage} artifact: {}", path.display()))?;
        if content.trim().is_empty() {
            bail!(
                "{} is empty - all previous stages must be completed before validation",
                path.display()
            );
        }
    }
    Ok(())
}
