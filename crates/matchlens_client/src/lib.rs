//! Matchlens client: multipart HTTP interface to the analysis service.
mod analyze;
mod handle;
mod settings;
mod types;

pub use analyze::{AnalyzeBackend, HttpAnalyzeBackend};
pub use handle::ClientHandle;
pub use settings::ServiceSettings;
pub use types::{AnalysisReport, AnalyzeError, AnalyzeRequest, ClientEvent, FailureKind};
