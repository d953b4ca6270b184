//! Matchlens core: pure submission state machine and view-model helpers.
mod effect;
mod error;
mod limits;
mod msg;
mod report;
mod state;
mod update;
mod view_model;

pub use effect::{AnalysisRequest, Effect};
pub use error::SubmissionError;
pub use limits::SubmissionLimits;
pub use msg::Msg;
pub use report::{AnalysisReport, ExperienceLevel};
pub use state::{ControllerState, RequestPhase, SelectedFile};
pub use update::update;
pub use view_model::{ScoreBand, SubmissionViewModel};
