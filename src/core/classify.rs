// LogTriage - core/classify.rs
//
// Second-stage classifier: matches the extracted error lines against a
// fixed, ordered rule table to guess a probable root-cause category.
// Core layer: pure logic, no I/O.

use regex::Regex;
use std::sync::OnceLock;

/// A classification rule: a compiled pattern paired with the human-readable
/// root-cause label it assigns. Rules are ordered; the first match wins.
struct Rule {
    pattern: Regex,
    label: &'static str,
}

/// The fixed rule table, compiled once per process.
///
/// Order is priority: earlier rules win over later ones when both match.
/// All patterns are case-sensitive except the docker and permission rules —
/// a deliberate distinction ("AssertionError" is a Python exception name and
/// must not match "assertionerror", while "Permission denied" appears in
/// both sentence and lower case across tools).
fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();

    RULES.get_or_init(|| {
        // Helper to compile a pattern without panicking at runtime.
        // Every rule is exercised by the unit tests below, so a bad pattern
        // shows up as a failing test rather than a runtime panic.
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("rules: invalid regex")
        }

        vec![
            // The module name is captured for future use in suggestions but
            // plays no part in classification.
            Rule {
                pattern: re(r"ModuleNotFoundError: No module named '(.+)'"),
                label: "Missing dependency",
            },
            Rule {
                pattern: re(r"SyntaxError:"),
                label: "Syntax error",
            },
            Rule {
                pattern: re(r"AssertionError"),
                label: "Test assertion failed",
            },
            Rule {
                pattern: re(r"npm ERR!"),
                label: "Package-manager install or build error",
            },
            // `.` does not cross newlines, so "docker:" and the error word
            // must appear on the same line.
            Rule {
                pattern: re(r"(?i)docker:.*(error|failed)"),
                label: "Container build/runtime error",
            },
            Rule {
                pattern: re(r"(?i)permission denied"),
                label: "Permission issue",
            },
        ]
    })
}

/// Guess a root-cause category for the given extracted error lines.
///
/// The lines are joined into a single newline-separated block and each
/// rule's pattern is tested against the block in table order; the first
/// rule that matches anywhere in the block supplies the label. Returns
/// `None` when no rule matches, and unconditionally for empty input —
/// no rule may classify a log with no error lines, even if a future
/// pattern were able to match the empty string.
pub fn guess_root_cause(error_lines: &[String]) -> Option<&'static str> {
    if error_lines.is_empty() {
        return None;
    }

    let joined = error_lines.join("\n");
    rules()
        .iter()
        .find(|rule| rule.pattern.is_match(&joined))
        .map(|rule| rule.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(guess_root_cause(&[]), None);
    }

    #[test]
    fn test_unclassifiable_lines_yield_none() {
        // Matches the keyword filter ("errors") but no rule pattern.
        let result = guess_root_cause(&lines(&["Build succeeded, 0 errors."]));
        assert_eq!(result, None);
    }

    #[test]
    fn test_missing_dependency() {
        let result = guess_root_cause(&lines(&[
            "Traceback (most recent call last):",
            "ModuleNotFoundError: No module named 'requests'",
        ]));
        assert_eq!(result, Some("Missing dependency"));
    }

    /// The module-name capture requires the single quotes; without them the
    /// rule must not fire.
    #[test]
    fn test_missing_dependency_requires_quoted_name() {
        let result = guess_root_cause(&lines(&["ModuleNotFoundError: No module named requests"]));
        assert_eq!(result, None);
    }

    #[test]
    fn test_syntax_error() {
        let result = guess_root_cause(&lines(&["SyntaxError: invalid syntax (app.py, line 3)"]));
        assert_eq!(result, Some("Syntax error"));
    }

    #[test]
    fn test_assertion_failed() {
        let result = guess_root_cause(&lines(&["AssertionError: expected 200, got 500"]));
        assert_eq!(result, Some("Test assertion failed"));
    }

    #[test]
    fn test_npm_error() {
        let result = guess_root_cause(&lines(&["npm ERR! missing script: build"]));
        assert_eq!(result, Some("Package-manager install or build error"));
    }

    #[test]
    fn test_docker_error_case_insensitive() {
        let result = guess_root_cause(&lines(&["DOCKER: Build FAILED at step 4/9"]));
        assert_eq!(result, Some("Container build/runtime error"));
    }

    /// "docker:" and the error word must share a line — `.` does not span
    /// the newline between joined error lines.
    #[test]
    fn test_docker_marker_and_error_word_on_separate_lines_do_not_match() {
        let result = guess_root_cause(&lines(&["docker: daemon exception", "pull failed"]));
        // The first line still matches: "exception" is a keyword but not part
        // of the docker rule; "docker:.*(error|failed)" needs error|failed
        // after "docker:" on the same line. Neither line satisfies it alone.
        assert_eq!(result, None);
    }

    #[test]
    fn test_permission_denied_case_insensitive() {
        let result = guess_root_cause(&lines(&["/deploy.sh: Permission Denied"]));
        assert_eq!(result, Some("Permission issue"));
    }

    /// Case-sensitivity of the first four rules is deliberate: a lowercased
    /// "assertionerror" must not classify as a test assertion failure.
    #[test]
    fn test_case_sensitive_rules_do_not_match_lowercase() {
        assert_eq!(guess_root_cause(&lines(&["assertionerror: oops"])), None);
        assert_eq!(guess_root_cause(&lines(&["syntaxerror: bad token"])), None);
        assert_eq!(guess_root_cause(&lines(&["NPM err! broken"])), None);
    }

    /// Rule priority: when several rules match the block, the earliest rule
    /// in the table wins regardless of line order.
    #[test]
    fn test_first_matching_rule_wins() {
        let result = guess_root_cause(&lines(&[
            "npm ERR! missing script: build",
            "AssertionError",
        ]));
        assert_eq!(result, Some("Test assertion failed"));
    }

    #[test]
    fn test_priority_missing_dependency_over_permission() {
        let result = guess_root_cause(&lines(&[
            "permission denied while loading site-packages",
            "ModuleNotFoundError: No module named 'yaml'",
        ]));
        assert_eq!(result, Some("Missing dependency"));
    }

    /// A rule may match across the join boundary only via explicit multi-line
    /// content within a single extracted line, never via `.` — pin the joined
    /// block behaviour for patterns anchored to literal text.
    #[test]
    fn test_match_anywhere_in_joined_block() {
        let result = guess_root_cause(&lines(&[
            "step 12 failed",
            "some context line with error",
            "SyntaxError: unexpected EOF",
        ]));
        assert_eq!(result, Some("Syntax error"));
    }
}
