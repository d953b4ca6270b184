use crate::{ExperienceLevel, SelectedFile};

/// Side effects requested by [`update`](crate::update), executed by the
/// platform layer against the analysis client.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue the single multipart POST for this submission.
    SubmitAnalysis { request: AnalysisRequest },
    /// Bring the results area into view after a successful analysis.
    /// Presentation only; front ends without a viewport ignore it.
    RevealResults,
    /// Abort the in-flight request during teardown.
    CancelInFlight,
}

/// Everything the client needs to build the `/analyze` call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub resume: SelectedFile,
    pub job_description: String,
    pub experience_level: ExperienceLevel,
}
