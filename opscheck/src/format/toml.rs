//! TOML shape linter.
//!
//! This is deliberately not a TOML parser: each non-comment line is
//! checked against two shapes (section header, `key = value`) and
//! anything else is a warning. The result is always valid. Known
//! limitation: multi-line values (arrays, strings) and other nesting can
//! produce spurious warnings on their continuation lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::{FileKind, ValidationResult};

/// Section header shape: `[server]`, `[a.b-c]`.
static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\[[\w.\-]+\]") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid section regex: {err}"),
    }
});

/// Key-value shape: `key = value`, `some-key=1`.
static KEY_VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"[\w\-]+\s*=\s*.+") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid key-value regex: {err}"),
    }
});

/// Lint TOML content. Never produces errors — only warnings.
#[must_use]
pub fn validate_toml(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new(FileKind::Toml);
    let mut has_content = false;

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        has_content = true;

        if !SECTION_PATTERN.is_match(trimmed) && !KEY_VALUE_PATTERN.is_match(trimmed) {
            result.push_warning(format!(
                "Line {} doesn't match TOML syntax: {trimmed}",
                idx + 1
            ));
        }
    }

    if !has_content {
        result.push_warning("TOML file appears to be empty");
    }

    result
}
