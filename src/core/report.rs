// LogTriage - core/report.rs
//
// Report rendering for the triage summary: human-readable text and JSON.
// Core layer: writes to any Write trait object or returns a String.

use crate::core::model::FailureSummary;
use crate::util::error::ReportError;
use std::io::Write;

/// Render the summary as human-readable text.
pub fn render_human(summary: &FailureSummary) -> String {
    let mut output = String::new();

    output.push_str("=== Failure Summary ===\n");
    output.push_str(&format!(
        "Probable root cause: {}\n",
        summary
            .probable_root_cause
            .as_deref()
            .unwrap_or("Unknown")
    ));

    if summary.error_lines.is_empty() {
        output.push_str("\nNo error-like lines detected. Try a different log sample.\n");
        return output;
    }

    output.push_str("\nKey error lines:\n");
    for line in &summary.error_lines {
        output.push_str(&format!(" - {line}\n"));
    }

    output
}

/// Render the summary as pretty-printed JSON.
pub fn render_json<W: Write>(summary: &FailureSummary, writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, summary).map_err(|e| ReportError::Json { source: e })
}
