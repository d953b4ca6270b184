use std::time::Duration;

/// Connection settings for the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Upper bound for the whole call. Analysis can take minutes against a
    /// cold model, so the default is deliberately generous; deployments
    /// with a warm backend can tighten it.
    pub request_timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(300),
        }
    }
}

impl ServiceSettings {
    /// Endpoint for the analysis call, tolerant of a trailing slash.
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url.trim_end_matches('/'))
    }
}
