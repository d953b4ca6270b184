use std::time::Duration;

use matchlens_client::ServiceSettings;
use matchlens_core::SubmissionLimits;

/// Runtime configuration: validation limits plus service connection
/// settings, both starting from their defaults and overridable through
/// `MATCHLENS_*` environment variables so the client mirrors whatever
/// limits the deployed backend enforces.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub limits: SubmissionLimits,
    pub service: ServiceSettings,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut limits = SubmissionLimits::default();
        let mut service = ServiceSettings::default();

        if let Some(url) = lookup("MATCHLENS_BACKEND_URL") {
            service.base_url = url;
        }
        if let Some(secs) = parse(lookup("MATCHLENS_REQUEST_TIMEOUT_SECS")) {
            service.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse(lookup("MATCHLENS_CONNECT_TIMEOUT_SECS")) {
            service.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(bytes) = parse(lookup("MATCHLENS_MAX_FILE_BYTES")) {
            limits.max_file_bytes = bytes;
        }
        if let Some(chars) = parse(lookup("MATCHLENS_MIN_DESCRIPTION_CHARS")) {
            limits.min_description_chars = chars;
        }
        if let Some(chars) = parse(lookup("MATCHLENS_MAX_DESCRIPTION_CHARS")) {
            limits.max_description_chars = chars;
        }

        Self { limits, service }
    }
}

fn parse<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|raw| raw.trim().parse().ok())
}
