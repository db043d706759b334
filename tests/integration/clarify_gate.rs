//! Clarity Gate rounds against persisted state

use specgate::commands::clarify::{self, ClarifyOutcome};
use specgate::models::clarity::DimensionKind;
use specgate::models::project::{Mode, StageStatus};
use specgate::models::stage::Stage;

use super::helpers::TestProject;

fn project_at_clarify(mode: Mode) -> TestProject {
    let project = TestProject::new();
    project.init(mode);
    project.advance_to(Stage::Clarify);
    project
}

#[test]
fn test_framework_round_records_iteration_only() {
    let project = project_at_clarify(Mode::Guided);
    let before = project.state().stage(Stage::Clarify).iterations;

    let outcome = clarify::execute(&project.store(), &project.pipeline(), None).unwrap();

    assert_eq!(outcome, ClarifyOutcome::Framework);
    let state = project.state();
    assert_eq!(state.current_stage, Stage::Clarify);
    assert_eq!(state.clarity_score, 0);
    assert_eq!(state.stage(Stage::Clarify).iterations, before + 1);
}

#[test]
fn test_blank_scores_are_treated_as_framework_round() {
    let project = project_at_clarify(Mode::Guided);
    let outcome = clarify::execute(&project.store(), &project.pipeline(), Some("  ")).unwrap();
    assert_eq!(outcome, ClarifyOutcome::Framework);
}

#[test]
fn test_weak_round_stays_in_clarify_and_stores_score() {
    let project = project_at_clarify(Mode::Expert);

    let outcome = clarify::execute(
        &project.store(),
        &project.pipeline(),
        Some("target_users:30,core_functionality:40,data_model:20"),
    )
    .unwrap();

    match outcome {
        ClarifyOutcome::NeedsClarification {
            score,
            threshold,
            uncovered,
        } => {
            assert_eq!(score, 13);
            assert_eq!(threshold, 50);
            assert_eq!(uncovered.len(), 7);
            assert_eq!(uncovered[0], DimensionKind::TargetUsers);
            assert!(!uncovered.contains(&DimensionKind::CoreFunctionality));
        }
        other => panic!("expected NeedsClarification, got {other:?}"),
    }

    let state = project.state();
    assert_eq!(state.current_stage, Stage::Clarify);
    assert_eq!(state.clarity_score, 13);
    assert_eq!(state.stage(Stage::Clarify).status, StageStatus::InProgress);
}

#[test]
fn test_second_round_can_pass_after_failing() {
    let project = project_at_clarify(Mode::Guided);

    clarify::execute(
        &project.store(),
        &project.pipeline(),
        Some("target_users:50,core_functionality:50"),
    )
    .unwrap();
    assert_eq!(project.state().current_stage, Stage::Clarify);

    let outcome = clarify::execute(
        &project.store(),
        &project.pipeline(),
        Some(
            "target_users:90,core_functionality:90,data_model:80,integrations:70,\
             edge_cases:70,security:75,scale_performance:60,scope_boundaries:80",
        ),
    )
    .unwrap();

    assert!(matches!(
        outcome,
        ClarifyOutcome::GatePassed { threshold: 70, .. }
    ));
    let state = project.state();
    assert_eq!(state.current_stage, Stage::Design);
    assert!(state.is_completed(Stage::Clarify));
    assert!(state.clarity_score >= 70);
}

#[test]
fn test_same_scores_pass_expert_but_not_guided() {
    let scores = "target_users:60,core_functionality:60,data_model:60,integrations:60,\
                  edge_cases:60,security:60,scale_performance:60,scope_boundaries:60";

    let expert = project_at_clarify(Mode::Expert);
    let outcome = clarify::execute(&expert.store(), &expert.pipeline(), Some(scores)).unwrap();
    assert_eq!(
        outcome,
        ClarifyOutcome::GatePassed {
            score: 60,
            threshold: 50
        }
    );

    let guided = project_at_clarify(Mode::Guided);
    let outcome = clarify::execute(&guided.store(), &guided.pipeline(), Some(scores)).unwrap();
    assert!(matches!(
        outcome,
        ClarifyOutcome::NeedsClarification { score: 60, .. }
    ));
}

#[test]
fn test_clamped_and_unknown_pairs() {
    let project = project_at_clarify(Mode::Expert);

    clarify::execute(
        &project.store(),
        &project.pipeline(),
        Some("target_users:150,core_functionality:-10,vibes:100,garbage"),
    )
    .unwrap();

    // target_users clamps to 100 with weight 10 out of 67.
    assert_eq!(project.state().clarity_score, 15);
}
