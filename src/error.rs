//! Typed failures returned by pipeline operations.
//!
//! Every variant is returned before any mutation happens, so a caller that
//! receives one can assume the project state is exactly as it was.

use thiserror::Error;

use crate::models::project::Mode;
use crate::models::stage::Stage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The clarify stage cannot be left until the score meets the mode threshold.
    #[error(
        "clarity gate not passed: score {score}/100 (need {threshold} for {mode} mode) - \
         run another clarify round to resolve ambiguities"
    )]
    ClarityGateNotMet { score: u8, threshold: u8, mode: Mode },

    #[error("already at the final stage: {stage}")]
    AlreadyAtFinalStage { stage: Stage },

    /// A stage value the registry cannot resolve. Only reachable through
    /// corrupted persisted state.
    #[error("unknown stage: {value}")]
    UnknownStage { value: String },

    #[error(
        "wrong pipeline stage: currently at '{actual}' ({}), but this operation requires '{expected}' ({})",
        .actual.metadata().name,
        .expected.metadata().name
    )]
    WrongStage { actual: Stage, expected: Stage },
}
