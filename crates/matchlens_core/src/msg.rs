use std::sync::Arc;

use crate::{AnalysisReport, ExperienceLevel, SubmissionError};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked a candidate resume file.
    FileSelected {
        name: String,
        mime_type: String,
        bytes: Arc<Vec<u8>>,
    },
    /// User edited the job description (unvalidated until submit).
    DescriptionEdited(String),
    /// User chose an experience level.
    ExperienceLevelChosen(ExperienceLevel),
    /// User triggered the analysis.
    SubmitClicked,
    /// The in-flight analysis request settled.
    AnalysisCompleted {
        result: Result<AnalysisReport, SubmissionError>,
    },
    /// The hosting view is going away; abort outstanding work.
    TeardownRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
