// LogTriage - core/model.rs
//
// Core data model types. Pure data definitions with no I/O or CLI
// dependencies. These types are the shared vocabulary across all layers.

use serde::Serialize;

/// The result of triaging one CI/CD log.
///
/// Constructed once per invocation and returned to the caller; it has no
/// further lifecycle.
#[derive(Debug, Clone, Serialize)]
pub struct FailureSummary {
    /// Error-like lines selected by the keyword filter, trimmed, in their
    /// original relative order, most-recent-last. Always the suffix
    /// (last ≤ max) of all matching lines in the input.
    pub error_lines: Vec<String>,

    /// Root-cause category guessed from the error lines. `None` when no
    /// classification rule matched. When present, always one of the fixed
    /// rule labels — a pattern-matched category, not a verified diagnosis.
    pub probable_root_cause: Option<String>,
}
