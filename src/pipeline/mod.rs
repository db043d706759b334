//! Pipeline state machine
//!
//! Enforces the fixed stage sequence and the one conditional edge in it: the
//! pipeline cannot leave `clarify` until the project's clarity score meets the
//! threshold for its mode.
//!
//! Every operation checks first and mutates second, so a failed call leaves
//! the project state untouched. Persistence is the caller's job; nothing here
//! performs I/O.

mod clock;


use tracing::{debug, info};

use crate::error::PipelineError;
use crate::models::project::{Mode, ProjectState};
use crate::models::stage::{index_of, Stage, STAGE_ORDER};

pub use clock::{Clock, FixedClock, SystemClock};

/// Clarity score needed to pass the gate in `mode`.
pub fn clarity_threshold(mode: Mode) -> u8 {
    mode.clarity_threshold()
}

/// Check whether the pipeline may move past its current stage.
///
/// Returns the stage it would move to.
///
/// # Errors
/// - [`PipelineError::ClarityGateNotMet`] when leaving `clarify` below threshold
/// - [`PipelineError::UnknownStage`] when the registry cannot place the current stage
/// - [`PipelineError::AlreadyAtFinalStage`] when there is nowhere left to go
pub fn can_advance(state: &ProjectState) -> Result<Stage, PipelineError> {
    if state.current_stage == Stage::Clarify {
        let threshold = state.clarity_threshold();
        if state.clarity_score < threshold {
            return Err(PipelineError::ClarityGateNotMet {
                score: state.clarity_score,
                threshold,
                mode: state.mode(),
            });
        }
    }

    let idx = index_of(state.current_stage).ok_or_else(|| PipelineError::UnknownStage {
        value: state.current_stage.to_string(),
    })?;

    STAGE_ORDER
        .get(idx + 1)
        .copied()
        .ok_or(PipelineError::AlreadyAtFinalStage {
            stage: state.current_stage,
        })
}

/// Fail unless the pipeline is currently at `expected`. Never mutates.
pub fn require_stage(state: &ProjectState, expected: Stage) -> Result<(), PipelineError> {
    if state.current_stage != expected {
        return Err(PipelineError::WrongStage {
            actual: state.current_stage,
            expected,
        });
    }
    Ok(())
}

/// The transition engine, holding the clock used to stamp stage progress.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<C: Clock = SystemClock> {
    clock: C,
}

impl Pipeline<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Pipeline<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Create a project that has already passed `init`.
    ///
    /// `init` is recorded as completed in a single round and the pipeline
    /// waits at `propose`, which stays pending until work on it starts.
    pub fn initialize(&self, name: String, description: String, mode: Mode) -> ProjectState {
        let now = self.clock.now();
        let mut state = ProjectState::new(name, description, mode, now);

        let init = state.stage_status.get_mut(Stage::Init);
        init.mark_in_progress(now);
        init.mark_completed(now);
        state.current_stage = Stage::Propose;

        info!(project = %state.name, %mode, "initialized pipeline");
        state
    }

    /// Move to the next stage.
    ///
    /// Marks the current stage completed, then enters the next one (setting
    /// its start time if unset and counting a new iteration). Both writes
    /// happen only after [`can_advance`] succeeds.
    pub fn advance(&self, state: &mut ProjectState) -> Result<Stage, PipelineError> {
        let next = can_advance(state).inspect_err(|err| {
            debug!(stage = %state.current_stage, error = %err, "advance refused");
        })?;

        let now = self.clock.now();
        let previous = state.current_stage;

        state.stage_status.get_mut(previous).mark_completed(now);
        state.current_stage = next;
        state.stage_status.get_mut(next).mark_in_progress(now);

        info!(from = %previous, to = %next, "pipeline advanced");
        Ok(next)
    }

    /// (Re-)enter the current stage for another round of work.
    pub fn mark_in_progress(&self, state: &mut ProjectState) {
        let stage = state.current_stage;
        let entry = state.stage_status.get_mut(stage);
        entry.mark_in_progress(self.clock.now());
        debug!(%stage, iterations = entry.iterations, "stage in progress");
    }

    /// Close out the final stage. The pipeline has nowhere to advance to, so
    /// the stage is completed in place and `current_stage` does not move.
    pub fn complete_final_stage(&self, state: &mut ProjectState) -> Result<(), PipelineError> {
        let stage = state.current_stage;
        if !stage.is_final() {
            return Err(PipelineError::WrongStage {
                actual: stage,
                expected: STAGE_ORDER[STAGE_ORDER.len() - 1],
            });
        }

        state.stage_status.get_mut(stage).mark_completed(self.clock.now());
        info!(%stage, "pipeline completed");
        Ok(())
    }
}
