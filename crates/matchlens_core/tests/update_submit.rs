use std::sync::{Arc, Once};

use matchlens_core::{
    update, AnalysisReport, ControllerState, Effect, ExperienceLevel, Msg, RequestPhase,
    SubmissionError,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn ready_state() -> ControllerState {
    let state = ControllerState::default();
    let (state, _) = update(
        state,
        Msg::FileSelected {
            name: "resume.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            bytes: Arc::new(vec![0u8; 2 * 1024 * 1024]),
        },
    );
    let (state, _) = update(state, Msg::DescriptionEdited("j".repeat(200)));
    let (state, _) = update(
        state,
        Msg::ExperienceLevelChosen(ExperienceLevel::Experienced),
    );
    state
}

fn sample_report() -> AnalysisReport {
    AnalysisReport {
        match_score: 78,
        skills_match_percent: 80,
        experience_match_percent: 75,
        keyword_match_percent: 70,
        experience_level: "experienced".to_string(),
        summary: "Moderate match with 78% overall compatibility.".to_string(),
        strengths: vec!["Strong technical skill alignment".to_string()],
        areas_for_improvement: vec!["Add more role-specific keywords".to_string()],
        processing_time_secs: Some(12.41),
    }
}

#[test]
fn valid_submit_emits_exactly_one_request_effect() {
    init_logging();
    let state = ready_state();

    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(state.phase(), RequestPhase::InFlight);
    assert!(state.error().is_none());
    assert!(state.report().is_none());
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::SubmitAnalysis { request } => {
            assert_eq!(request.resume.name, "resume.pdf");
            assert_eq!(request.resume.mime_type, "application/pdf");
            assert_eq!(request.job_description.chars().count(), 200);
            assert_eq!(request.experience_level, ExperienceLevel::Experienced);
        }
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn submit_while_in_flight_is_a_noop() {
    init_logging();
    let state = ready_state();
    let (state, _effects) = update(state, Msg::SubmitClicked);

    let (next, effects) = update(state.clone(), Msg::SubmitClicked);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn successful_completion_stores_the_report() {
    init_logging();
    let state = ready_state();
    let (state, _effects) = update(state, Msg::SubmitClicked);

    let (state, effects) = update(
        state,
        Msg::AnalysisCompleted {
            result: Ok(sample_report()),
        },
    );

    assert_eq!(state.phase(), RequestPhase::Succeeded);
    assert_eq!(state.report(), Some(&sample_report()));
    assert!(state.error().is_none());
    assert_eq!(effects, vec![Effect::RevealResults]);
    assert_eq!(
        state.view().report.map(|report| report.match_score),
        Some(78)
    );
}

#[test]
fn failed_completion_sets_the_matching_message() {
    init_logging();
    let state = ready_state();
    let (state, _effects) = update(state, Msg::SubmitClicked);

    let (state, effects) = update(
        state,
        Msg::AnalysisCompleted {
            result: Err(SubmissionError::ServiceUnavailable),
        },
    );

    assert_eq!(state.phase(), RequestPhase::Failed);
    assert!(effects.is_empty());
    assert!(state.report().is_none());
    assert_eq!(state.error(), Some(&SubmissionError::ServiceUnavailable));
    assert_eq!(
        state.view().error_text.as_deref(),
        Some(SubmissionError::ServiceUnavailable.to_string().as_str())
    );
}

#[test]
fn timeout_failure_reaches_failed_with_timeout_message() {
    init_logging();
    let state = ready_state();
    let (state, _effects) = update(state, Msg::SubmitClicked);

    let (state, _effects) = update(
        state,
        Msg::AnalysisCompleted {
            result: Err(SubmissionError::Timeout),
        },
    );

    assert_eq!(state.phase(), RequestPhase::Failed);
    assert_eq!(state.error(), Some(&SubmissionError::Timeout));
}

#[test]
fn terminal_phases_accept_a_new_submit() {
    init_logging();
    let state = ready_state();

    // Failed -> InFlight again.
    let (state, _effects) = update(state, Msg::SubmitClicked);
    let (state, _effects) = update(
        state,
        Msg::AnalysisCompleted {
            result: Err(SubmissionError::Network),
        },
    );
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(state.phase(), RequestPhase::InFlight);
    assert_eq!(effects.len(), 1);
    assert!(state.error().is_none());

    // Succeeded -> InFlight again, clearing the old report.
    let (state, _effects) = update(
        state,
        Msg::AnalysisCompleted {
            result: Ok(sample_report()),
        },
    );
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(state.phase(), RequestPhase::InFlight);
    assert_eq!(effects.len(), 1);
    assert!(state.report().is_none());
}

#[test]
fn validation_failure_preserves_the_resting_phase() {
    init_logging();
    let state = ready_state();
    let (state, _effects) = update(state, Msg::SubmitClicked);
    let (state, _effects) = update(
        state,
        Msg::AnalysisCompleted {
            result: Ok(sample_report()),
        },
    );

    // Shrink the description below the minimum and resubmit from Succeeded.
    let (state, _) = update(state, Msg::DescriptionEdited("too short".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.phase(), RequestPhase::Succeeded);
    assert_eq!(
        state.error(),
        Some(&SubmissionError::DescriptionTooShort { min_chars: 50 })
    );
    // Setting the error dropped the stale report.
    assert!(state.report().is_none());
}

#[test]
fn stale_completion_is_discarded() {
    init_logging();
    let state = ready_state();

    let (next, effects) = update(
        state.clone(),
        Msg::AnalysisCompleted {
            result: Ok(sample_report()),
        },
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn teardown_cancels_only_in_flight_work() {
    init_logging();
    let state = ready_state();

    let (state, effects) = update(state, Msg::TeardownRequested);
    assert!(effects.is_empty());

    let (state, _effects) = update(state, Msg::SubmitClicked);
    let (_state, effects) = update(state, Msg::TeardownRequested);
    assert_eq!(effects, vec![Effect::CancelInFlight]);
}

#[test]
fn view_model_gates_the_submit_trigger() {
    init_logging();
    let state = ControllerState::default();
    assert!(!state.view().can_submit);

    let state = ready_state();
    assert!(state.view().can_submit);

    let (state, _effects) = update(state, Msg::SubmitClicked);
    assert!(!state.view().can_submit);
}
