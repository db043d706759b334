//! Shared test helpers

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use specgate::commands::{clarify, init, stage};
use specgate::fs::{FileStore, ProjectDir, ProjectStore};
use specgate::models::project::{Mode, ProjectState};
use specgate::models::stage::{Stage, STAGE_ORDER};
use specgate::{FixedClock, Pipeline};

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 10, 14, 0, 0).unwrap()
}

/// A temporary project root with a default-layout store.
pub struct TestProject {
    pub temp: TempDir,
    pub clock: FixedClock,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
            clock: FixedClock::new(start_time()),
        }
    }

    pub fn store(&self) -> FileStore<&FixedClock> {
        FileStore::with_clock(ProjectDir::with_default_layout(self.temp.path()), &self.clock)
    }

    pub fn pipeline(&self) -> Pipeline<&FixedClock> {
        Pipeline::with_clock(&self.clock)
    }

    pub fn init(&self, mode: Mode) {
        init::execute(
            &self.store(),
            &self.pipeline(),
            "recipes".to_string(),
            "Share and rate cooking recipes".to_string(),
            mode,
        )
        .expect("init should succeed");
    }

    pub fn state(&self) -> ProjectState {
        self.store().load().expect("state should load")
    }

    /// Advance through every stage before `target`, starting from propose.
    pub fn advance_to(&self, target: Stage) {
        while self.state().current_stage != target {
            let current = self.state().current_stage;
            stage::advance(&self.store(), &self.pipeline(), current)
                .unwrap_or_else(|e| panic!("advance from {current} failed: {e:#}"));
        }
    }

    /// Walk an expert project all the way to validate, passing the gate.
    pub fn walk_to_validate(&self) {
        self.init(Mode::Expert);
        self.advance_to(Stage::Clarify);
        clarify::execute(
            &self.store(),
            &self.pipeline(),
            Some("target_users:80,core_functionality:80,data_model:70,integrations:60,\
                  edge_cases:60,security:70,scale_performance:50,scope_boundaries:80"),
        )
        .expect("clarify should pass the gate");
        self.advance_to(Stage::Validate);
    }

    pub fn write_artifact(&self, stage: Stage, content: &str) {
        let path = self
            .store()
            .artifact_path(stage)
            .unwrap_or_else(|| panic!("{stage} has no artifact"));
        std::fs::write(path, content).expect("Failed to write artifact");
    }

    /// Write a non-empty artifact for every stage before validate.
    pub fn write_stage_artifacts(&self) {
        for stage in STAGE_ORDER.iter().copied().filter(|s| !s.is_final()) {
            if self.store().artifact_path(stage).is_some() {
                self.write_artifact(stage, &format!("# {stage}\n\nDone.\n"));
            }
        }
    }
}
