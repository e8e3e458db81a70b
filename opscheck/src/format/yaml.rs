//! YAML validator: structural parse plus dialect annotation.
//!
//! Documents are deserialized into `serde_json::Value` so the dialect
//! rules are shared with the JSON validator.

use serde_json::Value;

use crate::dialect;
use crate::report::{FileKind, ValidationResult};

/// Validate YAML content.
///
/// Supports mappings, sequences and scalars, including multi-document
/// streams (`---` separators) — every document in the stream is
/// classified, so a Kubernetes manifest bundle gets a note per
/// document. Blank input and streams whose documents all parse to null
/// are valid-but-empty; a structural parse failure is the one hard
/// error.
#[must_use]
pub fn validate_yaml(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new(FileKind::Yaml);

    if content.trim().is_empty() {
        result.push_warning("YAML file is empty");
        return result;
    }

    match serde_saphyr::from_multiple::<Value>(content) {
        Ok(docs) => {
            if docs.iter().all(Value::is_null) {
                result.push_warning("YAML file is empty");
            } else {
                for doc in &docs {
                    dialect::classify(doc, &mut result);
                }
            }
        }
        Err(err) => result.push_error(format!("YAML parse error: {err}")),
    }

    result
}
