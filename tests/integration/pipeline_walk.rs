//! Full runs from init to a completed validate stage

use chrono::Duration;

use specgate::commands::{clarify, stage, validate};
use specgate::fs::ProjectStore;
use specgate::models::project::{Mode, StageStatus};
use specgate::models::stage::{Stage, STAGE_ORDER};
use specgate::PipelineError;

use super::helpers::{start_time, TestProject};

#[test]
fn test_init_persists_project_at_propose() {
    let project = TestProject::new();
    project.init(Mode::Guided);

    let state = project.state();
    assert_eq!(state.name, "recipes");
    assert_eq!(state.mode(), Mode::Guided);
    assert_eq!(state.current_stage, Stage::Propose);
    assert!(state.is_completed(Stage::Init));
    assert_eq!(state.stage(Stage::Propose).status, StageStatus::Pending);
    assert!(project.temp.path().join("sdd").join("sdd.json").exists());
}

#[test]
fn test_init_twice_is_refused() {
    let project = TestProject::new();
    project.init(Mode::Guided);

    let err = specgate::commands::init::execute(
        &project.store(),
        &project.pipeline(),
        "other".to_string(),
        "other".to_string(),
        Mode::Expert,
    )
    .unwrap_err();
    assert!(err.to_string().contains("already initialized"));
    assert_eq!(project.state().name, "recipes");
}

#[test]
fn test_init_rejects_blank_name() {
    let project = TestProject::new();
    let err = specgate::commands::init::execute(
        &project.store(),
        &project.pipeline(),
        "   ".to_string(),
        "desc".to_string(),
        Mode::Guided,
    )
    .unwrap_err();
    assert!(err.to_string().contains("name must not be empty"));
    assert!(!project.store().exists());
}

#[test]
fn test_full_pipeline_run() {
    let project = TestProject::new();
    project.init(Mode::Expert);
    let store = project.store();
    let pipeline = project.pipeline();

    for expected in [Stage::Propose, Stage::Specify] {
        stage::start(&store, &pipeline, expected).unwrap();
        project.clock.advance(Duration::minutes(10));
        stage::advance(&store, &pipeline, expected).unwrap();
    }
    assert_eq!(project.state().current_stage, Stage::Clarify);

    let outcome = clarify::execute(
        &store,
        &pipeline,
        Some(
            "target_users:80,core_functionality:90,data_model:60,integrations:50,\
             edge_cases:55,security:70,scale_performance:60,scope_boundaries:85",
        ),
    )
    .unwrap();
    assert!(matches!(outcome, clarify::ClarifyOutcome::GatePassed { .. }));

    for expected in [Stage::Design, Stage::Tasks] {
        stage::advance(&store, &pipeline, expected).unwrap();
    }
    project.write_stage_artifacts();
    validate::execute(&store, &pipeline).unwrap();

    let state = project.state();
    assert_eq!(state.current_stage, Stage::Validate);
    for stage in STAGE_ORDER {
        assert!(state.is_completed(stage), "{stage} should be completed");
    }

    let err = stage::advance(&store, &pipeline, Stage::Validate).unwrap_err();
    assert_eq!(
        err.downcast_ref::<PipelineError>(),
        Some(&PipelineError::AlreadyAtFinalStage {
            stage: Stage::Validate
        })
    );
}

#[test]
fn test_started_at_survives_rounds_and_iterations_accumulate() {
    let project = TestProject::new();
    project.init(Mode::Guided);
    let store = project.store();
    let pipeline = project.pipeline();

    stage::start(&store, &pipeline, Stage::Propose).unwrap();
    project.clock.advance(Duration::hours(1));
    stage::start(&store, &pipeline, Stage::Propose).unwrap();
    project.clock.advance(Duration::hours(1));
    stage::advance(&store, &pipeline, Stage::Propose).unwrap();

    let state = project.state();
    let propose = state.stage(Stage::Propose);
    assert_eq!(propose.iterations, 2);
    assert_eq!(propose.started_at, Some(start_time()));
    assert_eq!(propose.completed_at, Some(start_time() + Duration::hours(2)));

    let specify = state.stage(Stage::Specify);
    assert_eq!(specify.status, StageStatus::InProgress);
    assert_eq!(specify.iterations, 1);
    assert_eq!(specify.started_at, Some(start_time() + Duration::hours(2)));
    assert_eq!(state.updated_at, start_time() + Duration::hours(2));
}

#[test]
fn test_advance_without_start_records_a_round() {
    let project = TestProject::new();
    project.init(Mode::Guided);
    project.clock.advance(Duration::minutes(5));

    stage::advance(&project.store(), &project.pipeline(), Stage::Propose).unwrap();

    let state = project.state();
    let propose = state.stage(Stage::Propose);
    let entered = start_time() + Duration::minutes(5);
    assert_eq!(propose.status, StageStatus::Completed);
    assert_eq!(propose.started_at, Some(entered));
    assert_eq!(propose.completed_at, Some(entered));
    assert_eq!(propose.iterations, 1);
}

#[test]
fn test_advance_after_start_keeps_round_count() {
    let project = TestProject::new();
    project.init(Mode::Guided);
    let store = project.store();
    let pipeline = project.pipeline();

    stage::start(&store, &pipeline, Stage::Propose).unwrap();
    project.clock.advance(Duration::minutes(30));
    stage::advance(&store, &pipeline, Stage::Propose).unwrap();

    let propose = project.state().stage(Stage::Propose).clone();
    assert_eq!(propose.iterations, 1);
    assert_eq!(propose.started_at, Some(start_time()));
}
