use anyhow::Result;
use colored::Colorize;

use crate::fs::ProjectStore;
use crate::models::project::StageStatus;
use crate::models::stage::Stage;
use crate::pipeline::{require_stage, Clock, Pipeline};

use super::stage_label;

/// Begin (or resume) a round of work on `stage`.
pub fn start<S: ProjectStore, C: Clock>(
    store: &S,
    pipeline: &Pipeline<C>,
    stage: Stage,
) -> Result<()> {
    let mut state = store.load()?;
    require_stage(&state, stage)?;

    pipeline.mark_in_progress(&mut state);
    store.save(&mut state)?;

    println!(
        "  {} {} in progress (round {})",
        "▶".blue().bold(),
        stage_label(stage),
        state.current().iterations
    );
    Ok(())
}

/// Finish `stage` and move the pipeline to the next one.
///
/// A stage that was never started is entered first, so it still records a
/// start time and one round of work.
pub fn advance<S: ProjectStore, C: Clock>(
    store: &S,
    pipeline: &Pipeline<C>,
    stage: Stage,
) -> Result<()> {
    let mut state = store.load()?;
    require_stage(&state, stage)?;

    if state.current().status == StageStatus::Pending {
        pipeline.mark_in_progress(&mut state);
    }
    let next = pipeline.advance(&mut state)?;
    store.save(&mut state)?;

    println!(
        "  {} {} completed",
        "✓".green().bold(),
        stage_label(stage)
    );
    println!("  Now at {}", stage_label(next).bold());
    Ok(())
}
