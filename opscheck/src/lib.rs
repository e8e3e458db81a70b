//! # opscheck
//!
//! Multi-format configuration validation engine.
//!
//! Detects a file's format from its path (JSON, YAML, TOML, dotenv),
//! validates the content with a per-format policy — structural parsing
//! for JSON/YAML, lenient shape linting for TOML/ENV — tags well-known
//! dialects (Docker Compose, Ansible playbooks, Kubernetes manifests)
//! and folds per-file results into a directory-level verdict.
//!
//! The engine separates the **core validators** (pure functions over
//! content strings) from the **filesystem collaborator** (`scan`), so
//! everything interesting is testable without touching a disk.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use opscheck::{ScanConfig, validate_directory, validate_file};
//!
//! let config = ScanConfig::default();
//!
//! let result = validate_file(Path::new("deploy/compose.yaml"), &config);
//! println!("valid: {}", result.valid);
//! for warning in &result.warnings {
//!     println!("warning: {warning}");
//! }
//!
//! let summary = validate_directory(Path::new("deploy"), &config);
//! println!("{}/{} files valid", summary.files_valid, summary.files_checked);
//! ```

pub mod artifact;
mod config;
pub mod dialect;
pub mod format;
pub mod output;
mod report;
pub mod scan;

pub use config::ScanConfig;
pub use dialect::DialectHint;
pub use report::{DirectorySummary, FileKind, FileOutcome, ValidationResult};
pub use scan::ScanError;

use std::path::Path;

use tracing::debug;

/// Validate already-read content against the format detected from `path`.
///
/// An unknown format is not rejected: the content is run through the JSON
/// validator as a last resort, with a warning that the type was
/// unrecognized prepended to whatever that fallback finds.
#[must_use]
pub fn validate_content(content: &str, path: &Path) -> ValidationResult {
    match FileKind::detect(path) {
        FileKind::Json => format::json::validate_json(content),
        FileKind::Yaml => format::yaml::validate_yaml(content),
        FileKind::Toml => format::toml::validate_toml(content),
        FileKind::Env => format::env::validate_env(content),
        FileKind::Directory | FileKind::Unknown => {
            let mut result = format::json::validate_json(content);
            result
                .warnings
                .insert(0, "Unknown file type, attempting JSON parse".to_owned());
            result
        }
    }
}

/// Validate a single file on disk.
///
/// Fails closed: a missing or unreadable file yields an invalid result
/// with an explicit error — these are the only conditions besides
/// JSON/YAML parse failures that are hard errors rather than warnings.
#[must_use]
pub fn validate_file(path: &Path, config: &ScanConfig) -> ValidationResult {
    if !path.exists() {
        let mut result = ValidationResult::new(FileKind::detect(path));
        result.push_error(format!("File not found: {}", path.display()));
        return result;
    }

    match scan::read_file_bounded(path, config.max_file_size) {
        Ok(content) => {
            debug!(path = %path.display(), "validating file");
            validate_content(&content, path)
        }
        Err(err) => {
            let mut result = ValidationResult::new(FileKind::detect(path));
            result.push_error(err.to_string());
            result
        }
    }
}

/// Validate every matching file under a directory tree.
///
/// Files whose detected format is unknown are skipped silently. A walk
/// failure (permission denied, loop) is recorded as a directory-scope
/// error and flips the aggregate verdict, but never aborts the scan:
/// one bad file or one inaccessible subtree must not stop the rest.
#[must_use]
pub fn validate_directory(path: &Path, config: &ScanConfig) -> DirectorySummary {
    let mut summary = DirectorySummary::new();

    let (files, scan_errors) = scan::find_files(path, config);
    for message in scan_errors {
        summary.push_scan_error(message);
    }

    for file in files {
        let result = validate_file(&file, config);
        summary.absorb(file, result);
    }

    debug!(
        checked = summary.files_checked,
        valid = summary.files_valid,
        "directory scan complete"
    );
    summary
}
