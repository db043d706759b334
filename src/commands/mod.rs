//! CLI commands
//!
//! Each stage-changing command follows the same order: check the pipeline is
//! at the expected stage, mark the stage in progress, do its work, advance,
//! then persist.

pub mod clarify;
pub mod init;
pub mod stage;
pub mod status;
pub mod validate;

use colored::{ColoredString, Colorize};

use crate::models::project::StageStatus;
use crate::models::stage::Stage;

/// Status glyph for the pipeline table.
pub fn status_indicator(status: StageStatus) -> &'static str {
    match status {
        StageStatus::Completed => "✓",
        StageStatus::InProgress => "▶",
        StageStatus::Skipped => "⏭",
        StageStatus::Pending => "○",
    }
}

fn colored_indicator(status: StageStatus) -> ColoredString {
    let glyph = status_indicator(status);
    match status {
        StageStatus::Completed => glyph.green().bold(),
        StageStatus::InProgress => glyph.blue().bold(),
        StageStatus::Skipped => glyph.yellow(),
        StageStatus::Pending => glyph.dimmed(),
    }
}

fn stage_label(stage: Stage) -> String {
    format!("{} ({})", stage.metadata().name, stage)
}
