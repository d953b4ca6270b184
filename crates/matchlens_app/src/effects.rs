use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use bytes::Bytes;
use client_logging::{client_info, client_warn};
use matchlens_client::{
    AnalysisReport as WireReport, AnalyzeError, AnalyzeRequest, ClientEvent, ClientHandle,
    FailureKind, ServiceSettings,
};
use matchlens_core::{AnalysisReport, Effect, Msg, SubmissionError, SubmissionLimits};

/// Executes controller effects against the analysis client and feeds
/// settled requests back into the message loop.
pub struct EffectRunner {
    handle: ClientHandle,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        settings: ServiceSettings,
        limits: SubmissionLimits,
    ) -> anyhow::Result<Self> {
        let handle = ClientHandle::new(settings)?;
        let runner = Self { handle };
        runner.spawn_event_loop(msg_tx, limits);
        Ok(runner)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis { request } => {
                    client_info!(
                        "SubmitAnalysis resume={} desc_chars={} level={}",
                        request.resume.name,
                        request.job_description.chars().count(),
                        request.experience_level
                    );
                    self.handle.submit(AnalyzeRequest {
                        file_name: request.resume.name.clone(),
                        mime_type: request.resume.mime_type.clone(),
                        resume: Bytes::copy_from_slice(&request.resume.bytes),
                        job_description: request.job_description,
                        experience_level: request.experience_level.as_str().to_string(),
                    });
                }
                Effect::RevealResults => {
                    // Console front end has no viewport to scroll; the
                    // report prints once the terminal phase is reached.
                }
                Effect::CancelInFlight => {
                    self.handle.cancel();
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>, limits: SubmissionLimits) {
        let handle = self.handle.clone();
        thread::spawn(move || loop {
            if let Some(event) = handle.try_recv() {
                let ClientEvent::Completed { result } = event;
                let msg = match result {
                    Ok(report) => Msg::AnalysisCompleted {
                        result: Ok(map_report(report)),
                    },
                    Err(error) if error.kind == FailureKind::Cancelled => {
                        // The controller already left InFlight; nothing to deliver.
                        client_info!("in-flight analysis cancelled");
                        continue;
                    }
                    Err(error) => {
                        client_warn!("analysis failed: {error}");
                        Msg::AnalysisCompleted {
                            result: Err(map_failure(&error, &limits)),
                        }
                    }
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_report(report: WireReport) -> AnalysisReport {
    AnalysisReport {
        match_score: report.match_score,
        skills_match_percent: report.skills_match_percent,
        experience_match_percent: report.experience_match_percent,
        keyword_match_percent: report.keyword_match_percent,
        experience_level: report.experience_level,
        summary: report.summary,
        strengths: report.strengths,
        areas_for_improvement: report.areas_for_improvement,
        processing_time_secs: report.processing_time,
    }
}

fn map_failure(error: &AnalyzeError, limits: &SubmissionLimits) -> SubmissionError {
    match error.kind {
        FailureKind::Network => SubmissionError::Network,
        FailureKind::Timeout => SubmissionError::Timeout,
        FailureKind::ServiceUnavailable => SubmissionError::ServiceUnavailable,
        FailureKind::PayloadTooLarge => SubmissionError::PayloadTooLarge {
            max_bytes: limits.max_file_bytes,
        },
        FailureKind::HttpStatus(_)
        | FailureKind::MalformedResponse
        | FailureKind::InvalidRequest
        | FailureKind::Cancelled => SubmissionError::Server,
    }
}
