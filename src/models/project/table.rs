use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::stage::{Stage, STAGE_ORDER};

use super::types::StageState;

/// Progress records for every stage, always holding all seven entries.
///
/// Persisted as an object keyed by stage name. Loading an object that lacks
/// any stage is rejected rather than filling in a pending default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Stage, StageState>",
    into = "BTreeMap<Stage, StageState>"
)]
pub struct StageTable {
    entries: [StageState; STAGE_ORDER.len()],
}

impl StageTable {
    /// A table with every stage pending.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stage: Stage) -> &StageState {
        &self.entries[stage.position()]
    }

    pub fn get_mut(&mut self, stage: Stage) -> &mut StageState {
        &mut self.entries[stage.position()]
    }

    /// Entries in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &StageState)> {
        STAGE_ORDER.iter().copied().zip(self.entries.iter())
    }
}

impl TryFrom<BTreeMap<Stage, StageState>> for StageTable {
    type Error = String;

    fn try_from(mut map: BTreeMap<Stage, StageState>) -> Result<Self, Self::Error> {
        let mut table = StageTable::new();
        for stage in STAGE_ORDER {
            let entry = map
                .remove(&stage)
                .ok_or_else(|| format!("stage_status is missing an entry for '{stage}'"))?;
            *table.get_mut(stage) = entry;
        }
        Ok(table)
    }
}

impl From<StageTable> for BTreeMap<Stage, StageState> {
    fn from(table: StageTable) -> Self {
        STAGE_ORDER.into_iter().zip(table.entries).collect()
    }
}
