pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod models;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{Clock, FixedClock, Pipeline, SystemClock};
