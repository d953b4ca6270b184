use crate::{AnalysisReport, ExperienceLevel, RequestPhase};

/// Read-only projection of the controller state for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionViewModel {
    pub phase: RequestPhase,
    pub resume_file_name: Option<String>,
    /// Live character count for the description box; feedback, not a gate.
    pub description_chars: usize,
    pub experience_level: ExperienceLevel,
    pub can_submit: bool,
    pub error_text: Option<String>,
    pub report: Option<AnalysisReport>,
}

/// Banding used by the results view to colour an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 85 {
            ScoreBand::Strong
        } else if score >= 70 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}
