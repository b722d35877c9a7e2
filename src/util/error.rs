// LogTriage - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogTriage operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum TriageError {
    /// Reading the input log file failed.
    Input(InputError),

    /// Rendering or serialising the report failed.
    Report(ReportError),
}

impl fmt::Display for TriageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "Input error: {e}"),
            Self::Report(e) => write!(f, "Report error: {e}"),
        }
    }
}

impl std::error::Error for TriageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Report(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

/// Errors related to reading the input log file.
#[derive(Debug)]
pub enum InputError {
    /// The given log path does not exist.
    LogNotFound { path: PathBuf },

    /// The given log path exists but is not a regular file.
    NotAFile { path: PathBuf },

    /// I/O error while reading the log file.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LogNotFound { path } => {
                write!(f, "Log file not found: '{}'", path.display())
            }
            Self::NotAFile { path } => {
                write!(f, "Log path '{}' is not a regular file", path.display())
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<InputError> for TriageError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors related to report rendering.
#[derive(Debug)]
pub enum ReportError {
    /// JSON serialisation error.
    Json { source: serde_json::Error },

    /// I/O error writing the report.
    Io { source: io::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "JSON report error: {source}"),
            Self::Io { source } => write!(f, "Report I/O error: {source}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::Io { source } => Some(source),
        }
    }
}

impl From<ReportError> for TriageError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

/// Convenience type alias for LogTriage results.
pub type Result<T> = std::result::Result<T, TriageError>;
