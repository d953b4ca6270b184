use std::sync::Arc;

use crate::view_model::SubmissionViewModel;
use crate::{AnalysisReport, ExperienceLevel, SubmissionError, SubmissionLimits};

/// A file accepted by the selection-time checks in [`update`](crate::update).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<Vec<u8>>,
}

impl SelectedFile {
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Lifecycle of the single analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    /// Transient while the submit gates run. Gates are synchronous, so this
    /// is never observable between messages; it exists so the view could
    /// distinguish it if validation ever grows an async step.
    Validating,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestPhase {
    /// Ready phases accept a new submission; only an in-flight request blocks.
    pub fn is_ready(self) -> bool {
        !matches!(self, RequestPhase::InFlight)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RequestPhase::Succeeded | RequestPhase::Failed)
    }
}

/// Submission controller state. Mutated only through [`update`](crate::update).
///
/// The report and the error are mutually exclusive at any instant: every
/// setter that stores one clears the other, and both are cleared when a new
/// request goes in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    limits: SubmissionLimits,
    resume_file: Option<SelectedFile>,
    job_description: String,
    experience_level: ExperienceLevel,
    phase: RequestPhase,
    report: Option<AnalysisReport>,
    error: Option<SubmissionError>,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new(SubmissionLimits::default())
    }
}

impl ControllerState {
    /// Limits are injected at construction, mirroring the deployed backend.
    pub fn new(limits: SubmissionLimits) -> Self {
        Self {
            limits,
            resume_file: None,
            job_description: String::new(),
            experience_level: ExperienceLevel::default(),
            phase: RequestPhase::default(),
            report: None,
            error: None,
        }
    }

    pub fn limits(&self) -> &SubmissionLimits {
        &self.limits
    }

    pub fn resume_file(&self) -> Option<&SelectedFile> {
        self.resume_file.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        self.error.as_ref()
    }

    pub fn view(&self) -> SubmissionViewModel {
        SubmissionViewModel {
            phase: self.phase,
            resume_file_name: self.resume_file.as_ref().map(|file| file.name.clone()),
            description_chars: self.job_description.chars().count(),
            experience_level: self.experience_level,
            can_submit: self.resume_file.is_some()
                && !self.job_description.is_empty()
                && self.phase.is_ready(),
            error_text: self.error.as_ref().map(ToString::to_string),
            report: self.report.clone(),
        }
    }

    pub(crate) fn store_file(&mut self, file: SelectedFile) {
        self.resume_file = Some(file);
        self.error = None;
    }

    pub(crate) fn set_description(&mut self, text: String) {
        self.job_description = text;
    }

    pub(crate) fn set_experience_level(&mut self, level: ExperienceLevel) {
        self.experience_level = level;
    }

    pub(crate) fn set_phase(&mut self, phase: RequestPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_error(&mut self, error: SubmissionError) {
        self.report = None;
        self.error = Some(error);
    }

    pub(crate) fn begin_request(&mut self) {
        self.report = None;
        self.error = None;
        self.phase = RequestPhase::InFlight;
    }

    pub(crate) fn complete(&mut self, report: AnalysisReport) {
        self.error = None;
        self.report = Some(report);
        self.phase = RequestPhase::Succeeded;
    }

    pub(crate) fn fail(&mut self, error: SubmissionError) {
        self.report = None;
        self.error = Some(error);
        self.phase = RequestPhase::Failed;
    }
}
