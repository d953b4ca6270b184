use async_trait::async_trait;
use client_logging::client_debug;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::settings::ServiceSettings;
use crate::types::{AnalysisReport, AnalyzeError, AnalyzeRequest, ErrorBody, FailureKind};

/// Boundary to the analysis service; mocked in tests.
#[async_trait]
pub trait AnalyzeBackend: Send + Sync {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport, AnalyzeError>;
}

/// Production backend speaking multipart HTTP via reqwest.
///
/// Timeouts are enforced by the underlying client, not by manual
/// scheduling; an elapsed timeout surfaces as [`FailureKind::Timeout`].
#[derive(Debug, Clone)]
pub struct HttpAnalyzeBackend {
    settings: ServiceSettings,
    client: reqwest::Client,
}

impl HttpAnalyzeBackend {
    pub fn new(settings: ServiceSettings) -> Result<Self, AnalyzeError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn build_form(request: &AnalyzeRequest) -> Result<Form, AnalyzeError> {
        let resume = Part::stream(request.resume.clone())
            .file_name(request.file_name.clone())
            .mime_str(&request.mime_type)
            .map_err(|err| AnalyzeError::new(FailureKind::InvalidRequest, err.to_string()))?;
        Ok(Form::new()
            .part("resume", resume)
            .text("jobDescription", request.job_description.clone())
            .text("experienceLevel", request.experience_level.clone()))
    }
}

#[async_trait]
impl AnalyzeBackend for HttpAnalyzeBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport, AnalyzeError> {
        let form = Self::build_form(request)?;
        client_debug!(
            "POST {} resume={} ({} bytes)",
            self.settings.analyze_url(),
            request.file_name,
            request.resume.len()
        );

        let response = self
            .client
            .post(self.settings.analyze_url())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, response.text().await.ok()));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&body)
            .map_err(|err| AnalyzeError::new(FailureKind::MalformedResponse, err.to_string()))
    }
}

fn classify_status(status: StatusCode, body: Option<String>) -> AnalyzeError {
    let message = body
        .as_deref()
        .and_then(|text| serde_json::from_str::<ErrorBody>(text).ok())
        .and_then(|body| body.error)
        .unwrap_or_else(|| status.to_string());

    let kind = match status.as_u16() {
        413 => FailureKind::PayloadTooLarge,
        502 | 503 => FailureKind::ServiceUnavailable,
        // The gateway gave up waiting for the model upstream.
        504 => FailureKind::Timeout,
        code => FailureKind::HttpStatus(code),
    };
    AnalyzeError::new(kind, message)
}

fn map_reqwest_error(err: reqwest::Error) -> AnalyzeError {
    if err.is_timeout() {
        return AnalyzeError::new(FailureKind::Timeout, err.to_string());
    }
    AnalyzeError::new(FailureKind::Network, err.to_string())
}
