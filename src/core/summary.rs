// LogTriage - core/summary.rs
//
// Coordinates the two-stage triage pipeline: keyword extraction, then
// rule-based classification. Pure function of the input text; never fails
// for any well-formed text input, including the empty string.

use crate::core::classify::guess_root_cause;
use crate::core::extract::extract_error_lines;
use crate::core::model::FailureSummary;
use crate::util::constants;

/// Configuration for a triage run.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Maximum number of error lines retained (must be positive; the CLI
    /// enforces the range).
    pub max_error_lines: usize,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            max_error_lines: constants::DEFAULT_MAX_ERROR_LINES as usize,
        }
    }
}

/// Summarise a CI/CD failure log.
///
/// Extraction runs first; classification operates only on the extracted
/// lines, never on the full log text.
pub fn summarize_failure(log_text: &str, config: &TriageConfig) -> FailureSummary {
    let error_lines = extract_error_lines(log_text, config.max_error_lines);
    let probable_root_cause = guess_root_cause(&error_lines).map(str::to_owned);

    tracing::debug!(
        error_lines = error_lines.len(),
        root_cause = probable_root_cause.as_deref().unwrap_or("none"),
        "Triage complete"
    );

    FailureSummary {
        error_lines,
        probable_root_cause,
    }
}
