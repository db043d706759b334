/// Minimum clarity score required to leave the clarify stage in guided mode.
pub const CLARITY_THRESHOLD_GUIDED: u8 = 70;

/// Minimum clarity score required to leave the clarify stage in expert mode.
pub const CLARITY_THRESHOLD_EXPERT: u8 = 50;

/// Upper bound of every clarity score (per dimension and aggregate).
pub const MAX_SCORE: u8 = 100;

/// A dimension counts as covered once its score is strictly above this value.
pub const COVERED_SCORE_FLOOR: u8 = 30;

/// Version stamped into newly created project state.
pub const PROJECT_VERSION: &str = "0.1.0";

/// File and directory names used by the on-disk layout.
pub mod layout {
    /// Default directory (relative to the project root) holding pipeline state.
    pub const DEFAULT_STATE_DIR: &str = "sdd";

    /// Name of the persisted project state file inside the state directory.
    pub const STATE_FILE: &str = "sdd.json";

    /// Optional settings file at the project root.
    pub const CONFIG_FILE: &str = "specgate.toml";
}
