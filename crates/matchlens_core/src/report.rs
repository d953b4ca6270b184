use std::fmt;

/// Coarse experience classification, either chosen by the user or detected
/// by the analysis service when left on `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceLevel {
    #[default]
    Auto,
    Intern,
    Fresher,
    Experienced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Auto,
        ExperienceLevel::Intern,
        ExperienceLevel::Fresher,
        ExperienceLevel::Experienced,
    ];

    /// Wire value sent in the `experienceLevel` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Auto => "auto",
            ExperienceLevel::Intern => "intern",
            ExperienceLevel::Fresher => "fresher",
            ExperienceLevel::Experienced => "experienced",
        }
    }

    /// Human label for selectors and reports.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Auto => "Auto Detect",
            ExperienceLevel::Intern => "Intern",
            ExperienceLevel::Fresher => "Fresher (0-2 years)",
            ExperienceLevel::Experienced => "Experienced (3+ years)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured match analysis returned by the service.
///
/// Replaced wholesale on every completed submission; the controller never
/// edits individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub match_score: u8,
    pub skills_match_percent: u8,
    pub experience_match_percent: u8,
    pub keyword_match_percent: u8,
    /// Level echoed back by the service, possibly auto-detected.
    pub experience_level: String,
    pub summary: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub processing_time_secs: Option<f64>,
}
