use serde::Serialize;

use crate::models::constants::COVERED_SCORE_FLOOR;

/// One of the eight fixed axes a requirements set is judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
    TargetUsers,
    CoreFunctionality,
    DataModel,
    Integrations,
    EdgeCases,
    Security,
    ScalePerformance,
    ScopeBoundaries,
}

impl DimensionKind {
    /// Every dimension, in the order rounds report them.
    pub const ALL: [DimensionKind; 8] = [
        DimensionKind::TargetUsers,
        DimensionKind::CoreFunctionality,
        DimensionKind::DataModel,
        DimensionKind::Integrations,
        DimensionKind::EdgeCases,
        DimensionKind::Security,
        DimensionKind::ScalePerformance,
        DimensionKind::ScopeBoundaries,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DimensionKind::TargetUsers => "target_users",
            DimensionKind::CoreFunctionality => "core_functionality",
            DimensionKind::DataModel => "data_model",
            DimensionKind::Integrations => "integrations",
            DimensionKind::EdgeCases => "edge_cases",
            DimensionKind::Security => "security",
            DimensionKind::ScalePerformance => "scale_performance",
            DimensionKind::ScopeBoundaries => "scope_boundaries",
        }
    }

    /// Look up a dimension by its wire name. Exact match only.
    pub fn from_name(name: &str) -> Option<DimensionKind> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Relative importance (1-10). The scorer normalizes, so these need not
    /// sum to anything in particular.
    pub fn weight(self) -> u32 {
        match self {
            DimensionKind::TargetUsers => 10,
            DimensionKind::CoreFunctionality => 10,
            DimensionKind::DataModel => 9,
            DimensionKind::Integrations => 7,
            DimensionKind::EdgeCases => 9,
            DimensionKind::Security => 8,
            DimensionKind::ScalePerformance => 6,
            DimensionKind::ScopeBoundaries => 8,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DimensionKind::TargetUsers => {
                "Who will use this? Are user roles, personas, and their needs clearly defined?"
            }
            DimensionKind::CoreFunctionality => {
                "Are the main features specific enough to implement without guessing?"
            }
            DimensionKind::DataModel => {
                "Are the entities, their fields, and relationships between them defined?"
            }
            DimensionKind::Integrations => {
                "Are external systems, APIs, and third-party services identified?"
            }
            DimensionKind::EdgeCases => {
                "Are error states, empty states, and unusual inputs accounted for?"
            }
            DimensionKind::Security => {
                "Are authentication, authorization, and data protection needs stated?"
            }
            DimensionKind::ScalePerformance => {
                "Are expected load, data volume, and response-time targets known?"
            }
            DimensionKind::ScopeBoundaries => {
                "Is it clear what is out of scope for this version?"
            }
        }
    }
}

impl std::fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weighted dimension with the score assigned for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClarityDimension {
    pub kind: DimensionKind,
    pub weight: u32,
    /// 0-100. Callers clamp before assigning; the scorer does not re-clamp.
    pub score: u8,
}

impl ClarityDimension {
    pub fn new(kind: DimensionKind) -> Self {
        Self {
            kind,
            weight: kind.weight(),
            score: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// True once the score is strictly above the coverage floor.
    pub fn covered(&self) -> bool {
        self.score > COVERED_SCORE_FLOOR
    }
}

/// A fresh set of all eight dimensions with scores zeroed.
pub fn default_dimensions() -> Vec<ClarityDimension> {
    DimensionKind::ALL
        .into_iter()
        .map(ClarityDimension::new)
        .collect()
}

/// Dimensions that are not yet covered, in the order given.
pub fn uncovered_dimensions(dimensions: &[ClarityDimension]) -> Vec<&ClarityDimension> {
    dimensions.iter().filter(|d| !d.covered()).collect()
}
