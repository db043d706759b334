//! Integration tests for specgate
//!
//! These drive whole pipeline runs through the commands and the file-backed
//! store, checking what ends up in `sdd.json`.

pub mod clarify_gate;
pub mod helpers;
pub mod pipeline_walk;
