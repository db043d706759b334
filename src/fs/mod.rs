pub mod locking;
pub mod project_dir;
pub mod store;

pub use project_dir::ProjectDir;
pub use store::{FileStore, ProjectStore, StoreError};
