// LogTriage - app/input.rs
//
// Reads the input log file and hands decoded text to the core.
// Decoding is lenient: CI logs routinely contain mixed encodings and raw
// subprocess output, so undecodable bytes are replaced rather than fatal.

use crate::util::error::InputError;
use std::path::Path;

/// Read a log file into a String, replacing invalid UTF-8 sequences.
///
/// A missing path is a distinct, user-reported error; everything else
/// surfaces as an I/O error with path context.
pub fn read_log_text(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::LogNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(InputError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| InputError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })?;

    tracing::debug!(
        file = %path.display(),
        bytes = bytes.len(),
        "Log file read"
    );

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
