use std::fmt::Write as _;

use matchlens_core::{AnalysisReport, ScoreBand};

/// Formats the analysis report for the terminal.
pub fn format_report(report: &AnalysisReport) -> String {
    let band = match ScoreBand::for_score(report.match_score) {
        ScoreBand::Strong => "strong",
        ScoreBand::Moderate => "moderate",
        ScoreBand::Weak => "weak",
    };

    let mut out = String::new();
    let _ = writeln!(out, "Match score: {}% ({band})", report.match_score);
    let _ = writeln!(out, "  Skills match:     {}%", report.skills_match_percent);
    let _ = writeln!(
        out,
        "  Experience match: {}%",
        report.experience_match_percent
    );
    let _ = writeln!(out, "  Keyword match:    {}%", report.keyword_match_percent);
    let _ = writeln!(out, "  Detected level:   {}", report.experience_level);
    let _ = writeln!(out);
    let _ = writeln!(out, "Summary: {}", report.summary);

    if !report.strengths.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Strengths:");
        for item in &report.strengths {
            let _ = writeln!(out, "  - {item}");
        }
    }
    if !report.areas_for_improvement.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Areas for improvement:");
        for item in &report.areas_for_improvement {
            let _ = writeln!(out, "  - {item}");
        }
    }
    if let Some(secs) = report.processing_time_secs {
        let _ = writeln!(out);
        let _ = writeln!(out, "Processed in {secs:.2}s");
    }

    out
}
