use crate::{
    AnalysisRequest, ControllerState, Effect, Msg, RequestPhase, SelectedFile, SubmissionError,
    SubmissionLimits,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ControllerState, msg: Msg) -> (ControllerState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected {
            name,
            mime_type,
            bytes,
        } => {
            match check_file(state.limits(), &mime_type, bytes.len() as u64) {
                Ok(()) => state.store_file(SelectedFile {
                    name,
                    mime_type,
                    bytes,
                }),
                // The selection is rejected; a previously accepted file
                // (if any) stays in place.
                Err(error) => state.set_error(error),
            }
            Vec::new()
        }
        Msg::DescriptionEdited(text) => {
            state.set_description(text);
            Vec::new()
        }
        Msg::ExperienceLevelChosen(level) => {
            state.set_experience_level(level);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Single-flight rule: re-submitting while a request is out is a no-op.
            if state.phase() == RequestPhase::InFlight {
                return (state, Vec::new());
            }
            let resting_phase = state.phase();
            state.set_phase(RequestPhase::Validating);
            match build_request(&state) {
                Ok(request) => {
                    state.begin_request();
                    vec![Effect::SubmitAnalysis { request }]
                }
                Err(error) => {
                    // A failed gate does not advance the request lifecycle.
                    state.set_phase(resting_phase);
                    state.set_error(error);
                    Vec::new()
                }
            }
        }
        Msg::AnalysisCompleted { result } => {
            // A settle arriving after teardown or cancellation is stale.
            if state.phase() != RequestPhase::InFlight {
                return (state, Vec::new());
            }
            match result {
                Ok(report) => {
                    state.complete(report);
                    vec![Effect::RevealResults]
                }
                Err(error) => {
                    state.fail(error);
                    Vec::new()
                }
            }
        }
        Msg::TeardownRequested => {
            if state.phase() == RequestPhase::InFlight {
                vec![Effect::CancelInFlight]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Selection-time checks, short-circuiting on the first violation.
fn check_file(
    limits: &SubmissionLimits,
    mime_type: &str,
    size_bytes: u64,
) -> Result<(), SubmissionError> {
    if size_bytes > limits.max_file_bytes {
        return Err(SubmissionError::FileTooLarge {
            max_bytes: limits.max_file_bytes,
        });
    }
    if !limits.accepts_mime(mime_type) {
        return Err(SubmissionError::InvalidFileType);
    }
    Ok(())
}

/// Submit-time gates; returns the request only when every gate passes.
///
/// The minimum bound is checked against the trimmed text so a page of
/// whitespace cannot pass; the maximum is checked against the text as
/// typed, which is also what gets sent.
fn build_request(state: &ControllerState) -> Result<AnalysisRequest, SubmissionError> {
    let resume = match state.resume_file() {
        Some(file) if !state.job_description().is_empty() => file.clone(),
        _ => return Err(SubmissionError::MissingFields),
    };

    let limits = state.limits();
    let text = state.job_description();
    if text.trim().chars().count() < limits.min_description_chars {
        return Err(SubmissionError::DescriptionTooShort {
            min_chars: limits.min_description_chars,
        });
    }
    if text.chars().count() > limits.max_description_chars {
        return Err(SubmissionError::DescriptionTooLong {
            max_chars: limits.max_description_chars,
        });
    }

    Ok(AnalysisRequest {
        resume,
        job_description: text.to_string(),
        experience_level: state.experience_level(),
    })
}
