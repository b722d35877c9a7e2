// LogTriage - core/extract.rs
//
// First-stage keyword filter: selects error-like lines from raw log text.
// Core layer: pure logic, the app layer handles file reading and decoding.

use crate::util::constants::ERROR_KEYWORDS;

/// Scan raw log text line by line and return the trimmed lines that look
/// like errors, keeping at most the last `max_lines` matches.
///
/// A line qualifies if, after lowercasing, it contains any of the
/// `ERROR_KEYWORDS` substrings. Substring containment is intentional:
/// "failedToStart" and "0 errors" both qualify. Classification of what the
/// matches actually mean is the second stage's job (`core::classify`).
///
/// When more lines match than `max_lines`, only the last `max_lines` are
/// kept in their original order — in a CI log the most recent errors are
/// usually the most proximate cause of the failure. `str::lines` handles
/// both LF and CRLF line endings; blank lines never match the filter.
pub fn extract_error_lines(log_text: &str, max_lines: usize) -> Vec<String> {
    let mut hits: Vec<String> = Vec::new();

    for line in log_text.lines() {
        let lower = line.to_lowercase();
        if ERROR_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            hits.push(line.trim().to_string());
        }
    }

    // Keep the last N matches (usually most relevant).
    if hits.len() > max_lines {
        hits.drain(..hits.len() - max_lines);
    }

    tracing::debug!(
        hits = hits.len(),
        max_lines,
        "Error line extraction complete"
    );

    hits
}
