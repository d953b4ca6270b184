/// Everything that can sink a submission, locally or remotely.
///
/// Rendered through `Display` as the single user-facing message. Variants
/// that violate a configured bound carry the bound so the message can state
/// it; transport variants are produced by mapping the client failure kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Please provide both a resume and a job description.")]
    MissingFields,
    #[error("File size must be less than {}MB", mebibytes(.max_bytes))]
    FileTooLarge { max_bytes: u64 },
    #[error("Only PDF files are allowed")]
    InvalidFileType,
    #[error("Job description must be at least {min_chars} characters")]
    DescriptionTooShort { min_chars: usize },
    #[error("Job description must be less than {max_chars} characters")]
    DescriptionTooLong { max_chars: usize },
    #[error("Unable to connect to the server. The backend may be starting up (first request takes ~45 seconds). Please try again in a moment.")]
    Network,
    #[error("Analysis is taking longer than expected. Please try again.")]
    Timeout,
    #[error("Server is starting up. Please wait a moment and try again.")]
    ServiceUnavailable,
    #[error("The server refused the upload. File size must be less than {}MB", mebibytes(.max_bytes))]
    PayloadTooLarge { max_bytes: u64 },
    #[error("Server error occurred. Please try again.")]
    Server,
}

fn mebibytes(bytes: &u64) -> u64 {
    bytes / (1024 * 1024)
}
