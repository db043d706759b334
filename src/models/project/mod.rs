mod state;
mod table;
mod types;


pub use state::ProjectState;
pub use table::StageTable;
pub use types::{Mode, StageState, StageStatus};
