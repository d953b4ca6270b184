use std::fmt;

use bytes::Bytes;
use serde::Deserialize;

/// Payload for one `/analyze` call, already validated by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub file_name: String,
    pub mime_type: String,
    pub resume: Bytes,
    pub job_description: String,
    /// Wire value of the experience selector (`auto`, `intern`, ...).
    pub experience_level: String,
}

/// Match analysis as returned by the service; camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub match_score: u8,
    pub skills_match_percent: u8,
    pub experience_match_percent: u8,
    pub keyword_match_percent: u8,
    pub experience_level: String,
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
    /// Seconds the backend spent on the analysis; older revisions omit it.
    #[serde(default)]
    pub processing_time: Option<f64>,
}

/// Optional body the service attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    /// 502/503; typically a cold start of the model host.
    ServiceUnavailable,
    /// 413 from the server's own upload cap.
    PayloadTooLarge,
    /// Any other non-2xx status.
    HttpStatus(u16),
    /// 2xx whose body did not parse as a report.
    MalformedResponse,
    /// The request could not be constructed locally.
    InvalidRequest,
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::ServiceUnavailable => write!(f, "service unavailable"),
            FailureKind::PayloadTooLarge => write!(f, "payload too large"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Transport-level failure: a machine kind plus the closest human message
/// (the backend's own `error` string when it sent one).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AnalyzeError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalyzeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Event emitted by [`ClientHandle`](crate::ClientHandle) when a
/// submission settles.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Completed {
        result: Result<AnalysisReport, AnalyzeError>,
    },
}
