use crate::state::CheckOutcome;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckerViewModel {
    pub reference_name: Option<String>,
    pub test_name: Option<String>,
    pub loading: bool,
    pub missing_files_alert: bool,
    pub result: Option<CheckResultView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckResultView {
    pub similarity_display: String,
    pub level: String,
    pub severity: LevelSeverity,
    pub test_file: String,
    pub reference_file: String,
}

impl CheckResultView {
    pub(crate) fn from_outcome(outcome: &CheckOutcome) -> Self {
        Self {
            similarity_display: format_similarity(outcome.similarity),
            level: outcome.plagiarism_level.clone(),
            severity: classify_level(&outcome.plagiarism_level),
            test_file: outcome.test_file.clone(),
            reference_file: outcome.reference_file.clone(),
        }
    }
}

/// Display severity for a plagiarism-level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSeverity {
    Safe,
    Low,
    Medium,
    High,
    Critical,
    /// Labels the service added after this build shipped still render.
    Neutral,
}

/// Formats a `[0, 1]` similarity score as a two-decimal percentage.
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.2}%", similarity * 100.0)
}

/// Maps the service's categorical level labels to a display severity.
///
/// Total function: unrecognized labels fall back to `LevelSeverity::Neutral`.
pub fn classify_level(level: &str) -> LevelSeverity {
    match level {
        "Tidak Plagiarisme" => LevelSeverity::Safe,
        "Plagiarisme Ringan" => LevelSeverity::Low,
        "Plagiarisme Sedang" => LevelSeverity::Medium,
        "Plagiarisme Tinggi" => LevelSeverity::High,
        "Plagiarisme Sangat Tinggi" | "Plagiarisme Berat" => LevelSeverity::Critical,
        _ => LevelSeverity::Neutral,
    }
}
