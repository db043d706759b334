mod registry;
mod types;


pub use registry::{index_of, index_of_name, next_stage, StageMetadata, STAGE_ORDER};
pub use types::Stage;
