pub mod clarity;
pub mod constants;
pub mod project;
pub mod stage;
