use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::constants::PROJECT_VERSION;
use crate::models::stage::Stage;

use super::table::StageTable;
use super::types::{Mode, StageState, StageStatus};

/// The per-project aggregate the pipeline operates on.
///
/// Owned by whoever persists it; pipeline operations borrow it mutably for the
/// duration of one call and never keep hold of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectState {
    pub name: String,
    pub description: String,
    pub version: String,
    mode: Mode,
    pub current_stage: Stage,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub stage_status: StageTable,
    /// Aggregate clarity score (0-100). Meaningful once clarify has run.
    #[serde(default)]
    pub clarity_score: u8,
}

impl ProjectState {
    /// A project sitting at `init` with every stage pending.
    pub fn new(name: String, description: String, mode: Mode, now: DateTime<Utc>) -> Self {
        Self {
            name,
            description,
            version: PROJECT_VERSION.to_string(),
            mode,
            current_stage: Stage::Init,
            created_at: now,
            updated_at: now,
            stage_status: StageTable::new(),
            clarity_score: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn stage(&self, stage: Stage) -> &StageState {
        self.stage_status.get(stage)
    }

    pub fn current(&self) -> &StageState {
        self.stage_status.get(self.current_stage)
    }

    pub fn is_completed(&self, stage: Stage) -> bool {
        self.stage(stage).status == StageStatus::Completed
    }

    /// Threshold the clarity score must reach for this project's mode.
    pub fn clarity_threshold(&self) -> u8 {
        self.mode.clarity_threshold()
    }
}
