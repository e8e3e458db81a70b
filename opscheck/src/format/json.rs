//! JSON validator: full structural parse plus dialect annotation.

use serde_json::Value;

use crate::dialect;
use crate::report::{FileKind, ValidationResult};

/// Validate JSON content.
///
/// A parse failure is the one hard error this validator produces; the
/// message carries the byte offset of the failure. A successfully parsed
/// document only ever gains warnings and notes.
#[must_use]
pub fn validate_json(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new(FileKind::Json);

    match serde_json::from_str::<Value>(content) {
        Ok(doc) => {
            if let Value::Object(map) = &doc
                && map.is_empty()
            {
                result.push_warning("JSON object is empty");
            }

            if let Some(Value::String(version)) = doc.get("version") {
                result.push_note(format!("Version: {version}"));
            }

            dialect::classify(&doc, &mut result);
        }
        Err(err) => {
            let offset = byte_offset(content, err.line(), err.column());
            result.push_error(format!("JSON parse error at byte {offset}: {err}"));
        }
    }

    result
}

/// Translate `serde_json`'s 1-based line/column position into a byte
/// offset within `content`. Clamped to the content length for positions
/// the parser reports past the last line.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (idx, raw_line) in content.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            return offset + column.saturating_sub(1).min(raw_line.len());
        }
        offset += raw_line.len();
    }
    offset.min(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_with_version_note() {
        let result = validate_json(r#"{"version": "1.0"}"#);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.notes, vec!["Version: 1.0".to_owned()]);
        assert_eq!(result.file_type, FileKind::Json);
    }

    #[test]
    fn empty_object_warns() {
        let result = validate_json("{}");
        assert!(result.valid);
        assert_eq!(result.warnings, vec!["JSON object is empty".to_owned()]);
    }

    #[test]
    fn empty_array_does_not_warn() {
        let result = validate_json("[]");
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn non_string_version_is_ignored() {
        let result = validate_json(r#"{"version": 3}"#);
        assert!(result.valid);
        assert!(result.notes.is_empty());
    }

    #[test]
    fn parse_error_reports_byte_offset() {
        let result = validate_json("{bad json");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(
            result.errors[0].contains("JSON parse error at byte"),
            "got: {}",
            result.errors[0]
        );
    }

    #[test]
    fn parse_error_offset_points_into_later_line() {
        let content = "{\n  \"a\": 1,\n  oops\n}";
        let result = validate_json(content);
        assert!(!result.valid);
        // The failure is on line 3; the reported offset must land past
        // the first two lines.
        let msg = &result.errors[0];
        let offset: usize = msg
            .strip_prefix("JSON parse error at byte ")
            .and_then(|rest| rest.split(':').next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!(offset >= content.find("oops").unwrap());
    }

    #[test]
    fn compose_shaped_json_gets_dialect_warning() {
        let result = validate_json(r#"{"services": {"web": {"image": "x"}}}"#);
        assert!(result.valid);
        assert!(
            result
                .warnings
                .contains(&"Docker Compose 'version' field missing".to_owned())
        );
    }

    #[test]
    fn byte_offset_clamps() {
        assert_eq!(byte_offset("", 1, 5), 0);
        assert_eq!(byte_offset("ab", 1, 2), 1);
        assert_eq!(byte_offset("ab\ncd", 2, 1), 3);
    }
}
