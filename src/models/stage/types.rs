use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PipelineError;

/// A phase of the document pipeline.
///
/// Variants are declared in pipeline order, but the authoritative order is
/// [`STAGE_ORDER`](super::STAGE_ORDER); positions are always looked up there.
///
/// Deserialization goes through [`FromStr`], so an unrecognized stage name in
/// persisted state surfaces as [`PipelineError::UnknownStage`] instead of
/// being coerced into some default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Stage {
    Init,
    Propose,
    Specify,
    Clarify,
    Design,
    Tasks,
    Validate,
}

impl Stage {
    /// The identifier used in persisted state and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Init => "init",
            Stage::Propose => "propose",
            Stage::Specify => "specify",
            Stage::Clarify => "clarify",
            Stage::Design => "design",
            Stage::Tasks => "tasks",
            Stage::Validate => "validate",
        }
    }

    /// Markdown artifact produced by this stage, if any.
    pub fn artifact_filename(self) -> Option<&'static str> {
        match self {
            Stage::Init => None,
            Stage::Propose => Some("proposal.md"),
            Stage::Specify => Some("requirements.md"),
            Stage::Clarify => Some("clarifications.md"),
            Stage::Design => Some("design.md"),
            Stage::Tasks => Some("tasks.md"),
            Stage::Validate => Some("validation.md"),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Stage::Init),
            "propose" => Ok(Stage::Propose),
            "specify" => Ok(Stage::Specify),
            "clarify" => Ok(Stage::Clarify),
            "design" => Ok(Stage::Design),
            "tasks" => Ok(Stage::Tasks),
            "validate" => Ok(Stage::Validate),
            other => Err(PipelineError::UnknownStage {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Stage {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
