// LogTriage - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTriage";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Extraction limits
// =============================================================================

/// Default number of error lines retained from a log. When more lines match
/// the keyword filter, only the last N are kept — the most recent errors in a
/// CI log are typically the most proximate cause of failure.
pub const DEFAULT_MAX_ERROR_LINES: u64 = 25;

/// Minimum sensible value for the max-error-lines limit (must be non-zero;
/// keeping zero lines would make every summary empty).
pub const MIN_MAX_ERROR_LINES: u64 = 1;

/// Hard upper bound on max error lines (prevents configuration mistakes).
pub const ABSOLUTE_MAX_ERROR_LINES: u64 = 10_000;

// =============================================================================
// Keyword filter
// =============================================================================

/// Case-insensitive substring markers that select candidate error lines.
/// Matching is substring containment, not word-boundary matching, so
/// "failedToStart" or "0 errors" qualify by design.
pub const ERROR_KEYWORDS: &[&str] = &["error", "failed", "exception", "traceback", "fatal"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
