/// Client-side validation bounds.
///
/// These mirror the limits the analysis service enforces so that a
/// submission the service would refuse never leaves the machine. They are
/// injected into [`ControllerState::new`](crate::ControllerState::new)
/// rather than read from globals, which lets tests shrink them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionLimits {
    pub max_file_bytes: u64,
    pub allowed_mime_types: Vec<String>,
    pub min_description_chars: usize,
    pub max_description_chars: usize,
}

impl Default for SubmissionLimits {
    fn default() -> Self {
        Self {
            max_file_bytes: 16 * 1024 * 1024,
            allowed_mime_types: vec!["application/pdf".to_string()],
            min_description_chars: 50,
            max_description_chars: 10_000,
        }
    }
}

impl SubmissionLimits {
    pub fn accepts_mime(&self, mime_type: &str) -> bool {
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
    }
}
