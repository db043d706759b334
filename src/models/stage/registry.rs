//! Static stage registry: the canonical pipeline order and display metadata.
//!
//! Nothing here is mutable, so lookups are safe from any number of callers.

use serde::Serialize;

use super::types::Stage;

/// The fixed pipeline sequence. Transitions only ever move one step forward
/// along this list.
pub const STAGE_ORDER: [Stage; 7] = [
    Stage::Init,
    Stage::Propose,
    Stage::Specify,
    Stage::Clarify,
    Stage::Design,
    Stage::Tasks,
    Stage::Validate,
];

/// Human-readable information about a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// Display-only position, derived from [`STAGE_ORDER`].
    pub order: usize,
}

/// Position of `stage` in [`STAGE_ORDER`], or `None` if the registry does not
/// list it.
pub fn index_of(stage: Stage) -> Option<usize> {
    STAGE_ORDER.iter().position(|s| *s == stage)
}

/// Position of the stage named `name`, or `None` for anything outside the
/// fixed set.
pub fn index_of_name(name: &str) -> Option<usize> {
    STAGE_ORDER.iter().position(|s| s.as_str() == name)
}

/// The stage following `stage`, or `None` when `stage` is last (or unlisted).
pub fn next_stage(stage: Stage) -> Option<Stage> {
    index_of(stage).and_then(|idx| STAGE_ORDER.get(idx + 1).copied())
}

impl Stage {
    /// Position in [`STAGE_ORDER`].
    ///
    /// # Panics
    /// Panics if the registry omits a variant, which the registry tests rule out.
    pub fn position(self) -> usize {
        index_of(self).unwrap_or_else(|| unreachable!("stage '{self}' missing from STAGE_ORDER"))
    }

    pub fn next(self) -> Option<Stage> {
        next_stage(self)
    }

    pub fn is_final(self) -> bool {
        STAGE_ORDER.last() == Some(&self)
    }

    pub fn metadata(self) -> StageMetadata {
        let (name, description) = match self {
            Stage::Init => (
                "Initialize",
                "Set up project context, constraints, and pipeline structure",
            ),
            Stage::Propose => (
                "Propose",
                "Transform a vague idea into a structured proposal",
            ),
            Stage::Specify => (
                "Specify",
                "Extract formal requirements from the proposal",
            ),
            Stage::Clarify => (
                "Clarify",
                "Detect and resolve ambiguities through the Clarity Gate",
            ),
            Stage::Design => (
                "Design",
                "Create technical architecture and design decisions",
            ),
            Stage::Tasks => (
                "Tasks",
                "Break down design into atomic, actionable tasks",
            ),
            Stage::Validate => (
                "Validate",
                "Verify consistency across all artifacts",
            ),
        };

        StageMetadata {
            name,
            description,
            order: self.position(),
        }
    }
}
