use anyhow::Result;
use colored::Colorize;

use crate::fs::ProjectStore;
use crate::models::project::ProjectState;
use crate::models::stage::Stage;

use super::{colored_indicator, stage_label};

/// Show the pipeline overview for the current project.
pub fn execute<S: ProjectStore>(store: &S) -> Result<()> {
    let state = store.load()?;

    println!("{}", format!("Project: {}", state.name).bold().blue());
    println!("{}", "=".repeat(50));
    println!("  Description:  {}", state.description);
    println!("  Mode:         {}", state.mode());
    println!("  Created:      {}", state.created_at.to_rfc3339());
    println!("  Last updated: {}", state.updated_at.to_rfc3339());

    let current = state.current_stage.metadata();
    println!(
        "\n{} {}",
        "Current stage:".bold(),
        stage_label(state.current_stage)
    );
    println!("  {}", current.description.dimmed());

    if state.current_stage == Stage::Clarify {
        let threshold = state.clarity_threshold();
        let score = format!("{}/100", state.clarity_score);
        let score = if state.clarity_score >= threshold {
            score.green()
        } else {
            score.yellow()
        };
        println!(
            "  Clarity score: {} (need {} for {} mode)",
            score,
            threshold,
            state.mode()
        );
    }

    println!("\n{}", "Pipeline".bold());
    println!("{}", "─".repeat(50).dimmed());
    for (stage, entry) in state.stage_status.iter() {
        let marker = if stage == state.current_stage {
            " ← current".cyan().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {:<12} {:<12} iterations: {}{}",
            colored_indicator(entry.status),
            stage.metadata().name,
            entry.status.to_string(),
            entry.iterations,
            marker
        );
    }

    println!("\n{}", "Next step".bold());
    println!("  {}", next_step_guidance(&state));
    println!();
    Ok(())
}

/// What the user should do next, given where the pipeline stands.
pub fn next_step_guidance(state: &ProjectState) -> String {
    match state.current_stage {
        Stage::Init => "Run `specgate init` to start a new project.".to_string(),
        Stage::Propose => {
            "Write the proposal (proposal.md), then run `specgate advance propose`.".to_string()
        }
        Stage::Specify => {
            "Extract formal requirements (requirements.md), then run `specgate advance specify`."
                .to_string()
        }
        Stage::Clarify => format!(
            "Run `specgate clarify` to get the Clarity Gate dimensions. \
             Current score: {}/{} needed.",
            state.clarity_score,
            state.clarity_threshold()
        ),
        Stage::Design => {
            "Write the technical design (design.md), then run `specgate advance design`."
                .to_string()
        }
        Stage::Tasks => {
            "Break the design into tasks (tasks.md), then run `specgate advance tasks`."
                .to_string()
        }
        Stage::Validate => {
            if state.is_completed(Stage::Validate) {
                "Pipeline complete. All artifacts have been validated.".to_string()
            } else {
                "Cross-check every artifact, then run `specgate validate`.".to_string()
            }
        }
    }
}
