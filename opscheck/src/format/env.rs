//! Dotenv shape linter.
//!
//! Like the TOML linter, this never fails a file: lines either look like
//! `NAME=value` assignments, are skippable (blank/comment), or draw a
//! warning. Recognition uses search semantics, so a quoted value
//! containing spaces (`GREETING="hello world"`) still counts as a
//! recognized variable.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::{FileKind, ValidationResult};

/// Assignment shape anchored at line start: word-character identifier,
/// `=`, then a run of non-whitespace (possibly empty).
static ASSIGNMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^\w+=\S*") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid assignment regex: {err}"),
    }
});

/// Lint dotenv content. Never produces errors — only warnings and a
/// recognized-variable count note.
#[must_use]
pub fn validate_env(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new(FileKind::Env);
    let mut valid_vars = 0usize;

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;

        if line.is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        if ASSIGNMENT_PATTERN.is_match(line) {
            valid_vars += 1;

            if let Some((_, value)) = line.split_once('=')
                && value.contains(' ')
                && !value.starts_with('"')
                && !value.starts_with('\'')
            {
                result.push_warning(format!("Line {line_num}: unquoted value with spaces"));
            }
        } else {
            result.push_warning(format!("Line {line_num} doesn't match ENV syntax: {line}"));
        }
    }

    if valid_vars == 0 {
        result.push_warning("No valid environment variables found");
    }
    result.push_note(format!("Found {valid_vars} environment variables"));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_assignments_pass() {
        let content = "FOO=bar\nBAZ_2=qux\n\n# comment\n  # indented comment\n";
        let result = validate_env(content);
        assert!(result.valid);
        assert!(result.warnings.is_empty(), "got: {:?}", result.warnings);
        assert_eq!(result.notes, vec!["Found 2 environment variables".to_owned()]);
    }

    #[test]
    fn unquoted_value_with_spaces_warns_but_counts() {
        let result = validate_env("FOO=bar baz\n");
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec!["Line 1: unquoted value with spaces".to_owned()]
        );
        assert_eq!(result.notes, vec!["Found 1 environment variables".to_owned()]);
    }

    #[test]
    fn quoted_value_with_spaces_is_recognized_without_warning() {
        // Pins the search-semantics decision: the assignment pattern only
        // needs to match a prefix of the line, so quoted values containing
        // spaces are recognized and the quote check suppresses the warning.
        for content in ["GREETING=\"hello world\"\n", "GREETING='hello world'\n"] {
            let result = validate_env(content);
            assert!(result.valid);
            assert!(result.warnings.is_empty(), "content: {content:?}");
            assert_eq!(
                result.notes,
                vec!["Found 1 environment variables".to_owned()]
            );
        }
    }

    #[test]
    fn unrecognized_line_warns_with_raw_text() {
        let result = validate_env("not an assignment\n");
        assert!(result.valid, "ENV linting is always valid");
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("Line 1"));
        assert!(result.warnings[0].contains("not an assignment"));
        assert_eq!(
            result.warnings[1],
            "No valid environment variables found".to_owned()
        );
    }

    #[test]
    fn empty_file_warns_about_no_variables() {
        let result = validate_env("");
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec!["No valid environment variables found".to_owned()]
        );
        assert_eq!(result.notes, vec!["Found 0 environment variables".to_owned()]);
    }

    #[test]
    fn empty_value_is_a_valid_assignment() {
        let result = validate_env("EMPTY=\n");
        assert!(result.warnings.is_empty());
        assert_eq!(result.notes, vec!["Found 1 environment variables".to_owned()]);
    }

    #[test]
    fn lowercase_identifiers_are_word_characters() {
        let result = validate_env("lower_case=ok\n");
        assert!(result.warnings.is_empty());
    }
}
