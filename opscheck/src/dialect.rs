//! Heuristic dialect classification for parsed YAML/JSON documents.
//!
//! A dialect is a well-known configuration shape (Ansible playbook,
//! Docker Compose file, Kubernetes manifest) recognized from signature
//! keys in an already-parsed document. Classification drives extra
//! notes/warnings only; it never affects validity.
//!
//! Rules are an ordered list of independent predicate/effect pairs, each
//! evaluated on its own — a document may match several dialects, and
//! adding a dialect means appending a rule.

use serde_json::Value;

use crate::report::ValidationResult;

/// A recognized configuration dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectHint {
    AnsiblePlaybook,
    DockerCompose,
    KubernetesManifest,
}

struct DialectRule {
    hint: DialectHint,
    applies: fn(&Value) -> bool,
    annotate: fn(&Value, &mut ValidationResult),
}

fn is_playbook(doc: &Value) -> bool {
    doc.as_array()
        .and_then(|seq| seq.first())
        .and_then(Value::as_object)
        .is_some_and(|first| first.contains_key("hosts"))
}

fn is_compose(doc: &Value) -> bool {
    doc.as_object().is_some_and(|root| root.contains_key("services"))
}

fn is_kubernetes(doc: &Value) -> bool {
    doc.as_object()
        .is_some_and(|root| root.contains_key("apiVersion") && root.contains_key("kind"))
}

fn note_playbook(_doc: &Value, result: &mut ValidationResult) {
    result.push_note("Detected Ansible playbook");
}

fn note_compose(doc: &Value, result: &mut ValidationResult) {
    result.push_note("Detected Docker Compose file");
    if doc.as_object().is_some_and(|root| !root.contains_key("version")) {
        result.push_warning("Docker Compose 'version' field missing");
    }
}

fn note_kubernetes(_doc: &Value, result: &mut ValidationResult) {
    result.push_note("Detected Kubernetes manifest");
}

const RULES: &[DialectRule] = &[
    DialectRule {
        hint: DialectHint::AnsiblePlaybook,
        applies: is_playbook,
        annotate: note_playbook,
    },
    DialectRule {
        hint: DialectHint::DockerCompose,
        applies: is_compose,
        annotate: note_compose,
    },
    DialectRule {
        hint: DialectHint::KubernetesManifest,
        applies: is_kubernetes,
        annotate: note_kubernetes,
    },
];

/// Run every dialect rule against `doc`, annotating `result` with the
/// notes/warnings of each matching rule. Returns the matched hints.
pub fn classify(doc: &Value, result: &mut ValidationResult) -> Vec<DialectHint> {
    let mut hints = Vec::new();
    for rule in RULES {
        if (rule.applies)(doc) {
            hints.push(rule.hint);
            (rule.annotate)(doc, result);
        }
    }
    hints
}
