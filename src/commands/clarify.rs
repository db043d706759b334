//! The Clarity Gate round

use anyhow::Result;
use colored::Colorize;

use crate::fs::ProjectStore;
use crate::models::clarity::{
    calculate_score, default_dimensions, parse_dimension_scores, uncovered_dimensions,
    DimensionKind,
};
use crate::models::project::ProjectState;
use crate::models::stage::Stage;
use crate::pipeline::{require_stage, Clock, Pipeline};

/// What a clarify round ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarifyOutcome {
    /// No scores given; the dimension framework was shown.
    Framework,
    /// The score met the threshold and the pipeline moved to design.
    GatePassed { score: u8, threshold: u8 },
    /// The score fell short; these dimensions need another round.
    NeedsClarification {
        score: u8,
        threshold: u8,
        uncovered: Vec<DimensionKind>,
    },
}

/// Run one clarify round.
///
/// Without `scores`, prints the dimensions to assess. With scores, computes
/// the new clarity score, stores it, and advances when the gate passes.
/// The round is recorded and the state saved either way.
pub fn execute<S: ProjectStore, C: Clock>(
    store: &S,
    pipeline: &Pipeline<C>,
    scores: Option<&str>,
) -> Result<ClarifyOutcome> {
    let mut state = store.load()?;
    require_stage(&state, Stage::Clarify)?;

    pipeline.mark_in_progress(&mut state);
    let threshold = state.clarity_threshold();

    let outcome = match scores.map(str::trim).filter(|s| !s.is_empty()) {
        None => {
            print_framework(&state, threshold);
            ClarifyOutcome::Framework
        }
        Some(input) => {
            let mut dimensions = default_dimensions();
            parse_dimension_scores(input, &mut dimensions);

            let score = calculate_score(&dimensions);
            state.clarity_score = score;

            if score >= threshold {
                pipeline.advance(&mut state)?;
                ClarifyOutcome::GatePassed { score, threshold }
            } else {
                ClarifyOutcome::NeedsClarification {
                    score,
                    threshold,
                    uncovered: uncovered_dimensions(&dimensions)
                        .into_iter()
                        .map(|d| d.kind)
                        .collect(),
                }
            }
        }
    };

    store.save(&mut state)?;
    print_outcome(&outcome);
    Ok(outcome)
}

fn print_framework(state: &ProjectState, threshold: u8) {
    println!("{}", "Clarity Gate Analysis".bold().blue());
    println!(
        "  Mode: {} | Threshold: {}/100 | Round: {}",
        state.mode(),
        threshold,
        state.current().iterations
    );
    println!(
        "\n  Score each dimension 0-100 against the current requirements.\n  \
         A dimension counts as covered above 30.\n"
    );

    for dimension in default_dimensions() {
        println!(
            "  {} {}",
            dimension.name().bold(),
            format!("(weight: {}/10)", dimension.weight).dimmed()
        );
        println!("    {}", dimension.kind.description());
    }

    println!(
        "\n  Then run: {}",
        "specgate clarify --scores \"target_users:80,core_functionality:70,...\"".cyan()
    );
}

fn print_outcome(outcome: &ClarifyOutcome) {
    match outcome {
        ClarifyOutcome::Framework => {}
        ClarifyOutcome::GatePassed { score, threshold } => {
            println!(
                "  {} Clarity Gate PASSED: {}/100 (threshold {})",
                "✓".green().bold(),
                score,
                threshold
            );
            println!("  Pipeline advanced to {}", "Design".bold());
        }
        ClarifyOutcome::NeedsClarification {
            score,
            threshold,
            uncovered,
        } => {
            println!(
                "  {} More clarification needed: {}/100 (need {})",
                "✗".yellow().bold(),
                score,
                threshold
            );
            if !uncovered.is_empty() {
                let names: Vec<&str> = uncovered.iter().map(|kind| kind.as_str()).collect();
                println!("  Weak areas: {}", names.join(", "));
            }
            println!(
                "  Run {} again for the next round.",
                "specgate clarify".cyan()
            );
        }
    }
}
