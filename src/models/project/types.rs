use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::constants::{CLARITY_THRESHOLD_EXPERT, CLARITY_THRESHOLD_GUIDED};

/// How the pipeline interacts with the user. Fixed when the project is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Step-by-step guidance with a stricter clarity bar.
    #[default]
    Guided,
    /// Streamlined flow for users who already know what they want.
    Expert,
}

impl Mode {
    /// Minimum clarity score needed to leave the clarify stage.
    pub fn clarity_threshold(self) -> u8 {
        match self {
            Mode::Guided => CLARITY_THRESHOLD_GUIDED,
            Mode::Expert => CLARITY_THRESHOLD_EXPERT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Guided => "guided",
            Mode::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guided" => Ok(Mode::Guided),
            "expert" => Ok(Mode::Expert),
            other => Err(format!("invalid mode '{other}' (expected 'guided' or 'expert')")),
        }
    }
}

/// Progress of a single pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    /// Representable in persisted state; no pipeline operation produces it.
    Skipped,
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::Pending => write!(f, "pending"),
            StageStatus::InProgress => write!(f, "in_progress"),
            StageStatus::Completed => write!(f, "completed"),
            StageStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// Per-stage progress record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageState {
    pub status: StageStatus,
    /// Set the first time the stage is entered; never cleared afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Set when the pipeline moves forward out of this stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Number of work rounds spent on this stage.
    #[serde(default)]
    pub iterations: u32,
}

impl StageState {
    /// Enter (or re-enter) the stage for another round of work.
    ///
    /// Keeps the first `started_at` across rounds.
    pub(crate) fn mark_in_progress(&mut self, now: DateTime<Utc>) {
        self.status = StageStatus::InProgress;
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        self.iterations = self.iterations.saturating_add(1);
    }

    pub(crate) fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.status = StageStatus::Completed;
        self.completed_at = Some(now);
    }
}
