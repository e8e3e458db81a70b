//! Result types produced by the validation engine.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Recognized configuration file kinds, plus the two labels a result can
/// carry that never come out of detection (`Directory`, `Unknown`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Json,
    Yaml,
    Toml,
    Env,
    Directory,
    Unknown,
}

impl FileKind {
    /// Detect the format of a file from its path alone.
    ///
    /// Pure and total: the suffix after the last `.` is matched
    /// case-sensitively against the known extensions; any path containing
    /// the substring `.env` counts as an env file (covers `.env`,
    /// `.env.local`, `production.env`). Never returns [`FileKind::Directory`].
    #[must_use]
    pub fn detect(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ if path.to_string_lossy().contains(".env") => Self::Env,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Env => "ENV",
            Self::Directory => "directory",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Outcome of validating a single file (or, for aggregation, a directory).
///
/// Invariant: `valid` is `true` exactly when `errors` is empty. Warnings
/// and notes never affect validity. Use [`ValidationResult::push_error`]
/// rather than touching the fields directly so the invariant holds.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationResult {
    /// Whether the file passed validation.
    pub valid: bool,
    /// Hard errors: parse failures, missing or unreadable files.
    pub errors: Vec<String>,
    /// Content warnings: suspicious but non-fatal observations.
    pub warnings: Vec<String>,
    /// Informational messages (detected dialects, version fields, counts).
    pub notes: Vec<String>,
    /// The format this result was produced for.
    pub file_type: FileKind,
}

impl ValidationResult {
    /// A fresh, valid result for the given format.
    #[must_use]
    pub fn new(file_type: FileKind) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            notes: Vec::new(),
            file_type,
        }
    }

    /// Record a hard error. This is the only way validity flips to `false`.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    /// Record a content warning; validity is unaffected.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record an informational note; validity and warnings are unaffected.
    pub fn push_note(&mut self, message: impl Into<String>) {
        self.notes.push(message.into());
    }
}

/// A single file's result within a directory scan.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct FileOutcome {
    /// The path that was validated.
    pub path: PathBuf,
    /// The outcome for that path.
    pub result: ValidationResult,
}

/// Folded result of validating every matching file under a directory.
///
/// Invariants: `files_valid <= files_checked`; `valid` is `false` iff at
/// least one visited file was invalid or a directory-scope scan error
/// occurred. A directory whose files carry only warnings stays valid.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct DirectorySummary {
    /// Number of matching files visited.
    pub files_checked: usize,
    /// Number of visited files whose own result was valid.
    pub files_valid: usize,
    /// Overall verdict for the directory.
    pub valid: bool,
    /// Merged errors from invalid files plus directory-scope scan errors.
    pub errors: Vec<String>,
    /// Directory-scope failures only (walk errors, bad exclude
    /// patterns). Each entry also appears in `errors`; this field lets
    /// presentation layers separate scope without inspecting message
    /// text.
    pub scan_errors: Vec<String>,
    /// Merged warnings from every visited file.
    pub warnings: Vec<String>,
    /// Per-file outcomes, for presentation layers that report each file.
    pub files: Vec<FileOutcome>,
    /// Always [`FileKind::Directory`]; kept so serialized summaries are
    /// self-describing alongside file results.
    pub file_type: FileKind,
}

impl DirectorySummary {
    pub(crate) fn new() -> Self {
        Self {
            files_checked: 0,
            files_valid: 0,
            valid: true,
            errors: Vec::new(),
            scan_errors: Vec::new(),
            warnings: Vec::new(),
            files: Vec::new(),
            file_type: FileKind::Directory,
        }
    }

    /// Fold one file's outcome into the aggregate.
    pub(crate) fn absorb(&mut self, path: PathBuf, result: ValidationResult) {
        self.files_checked += 1;
        if result.valid {
            self.files_valid += 1;
        } else {
            self.valid = false;
            self.errors.extend(result.errors.iter().cloned());
        }
        self.warnings.extend(result.warnings.iter().cloned());
        self.files.push(FileOutcome { path, result });
    }

    /// Record a directory-scope failure (walk error, unreadable subtree).
    /// Flips the verdict but never aborts the scan.
    pub(crate) fn push_scan_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.valid = false;
        self.scan_errors.push(message.clone());
        self.errors.push(message);
    }

    /// Number of visited files whose own result was invalid.
    #[must_use]
    pub fn files_invalid(&self) -> usize {
        self.files_checked - self.files_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn detect_known_extensions() {
        assert_eq!(FileKind::detect(Path::new("app/config.json")), FileKind::Json);
        assert_eq!(FileKind::detect(Path::new("deploy.yaml")), FileKind::Yaml);
        assert_eq!(FileKind::detect(Path::new("deploy.yml")), FileKind::Yaml);
        assert_eq!(FileKind::detect(Path::new("Cargo.toml")), FileKind::Toml);
    }

    #[test]
    fn detect_env_by_substring() {
        assert_eq!(FileKind::detect(Path::new(".env")), FileKind::Env);
        assert_eq!(FileKind::detect(Path::new(".env.local")), FileKind::Env);
        assert_eq!(FileKind::detect(Path::new("conf/prod.env")), FileKind::Env);
    }

    #[test]
    fn detect_is_case_sensitive() {
        assert_eq!(FileKind::detect(Path::new("config.JSON")), FileKind::Unknown);
        assert_eq!(FileKind::detect(Path::new("deploy.YAML")), FileKind::Unknown);
    }

    #[test]
    fn detect_unknown() {
        assert_eq!(FileKind::detect(Path::new("readme.md")), FileKind::Unknown);
        assert_eq!(FileKind::detect(Path::new("noextension")), FileKind::Unknown);
    }

    #[test]
    fn push_error_flips_validity() {
        let mut result = ValidationResult::new(FileKind::Json);
        assert!(result.valid);
        result.push_warning("suspicious");
        result.push_note("info");
        assert!(result.valid, "warnings and notes must not affect validity");
        result.push_error("broken");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn summary_counts_stay_consistent() {
        let mut summary = DirectorySummary::new();
        summary.absorb(PathBuf::from("a.json"), ValidationResult::new(FileKind::Json));

        let mut bad = ValidationResult::new(FileKind::Json);
        bad.push_error("JSON parse error at byte 3: oops");
        summary.absorb(PathBuf::from("b.json"), bad);

        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.files_valid, 1);
        assert!(summary.files_valid <= summary.files_checked);
        assert!(!summary.valid);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.files_invalid(), 1);
    }

    #[test]
    fn summary_warnings_only_stays_valid() {
        let mut summary = DirectorySummary::new();
        let mut warned = ValidationResult::new(FileKind::Toml);
        warned.push_warning("TOML file appears to be empty");
        summary.absorb(PathBuf::from("empty.toml"), warned);

        assert!(summary.valid);
        assert_eq!(summary.files_valid, 1);
        assert_eq!(summary.warnings.len(), 1);
    }

    #[test]
    fn scan_error_flips_summary() {
        let mut summary = DirectorySummary::new();
        summary.push_scan_error("Directory scan error: permission denied");
        assert!(!summary.valid);
        assert_eq!(summary.files_checked, 0);
        assert_eq!(summary.scan_errors, summary.errors);
    }

    #[test]
    fn scan_errors_are_kept_separate_from_file_errors() {
        let mut summary = DirectorySummary::new();
        let mut bad = ValidationResult::new(FileKind::Json);
        bad.push_error("JSON parse error at byte 0: oops");
        summary.absorb(PathBuf::from("bad.json"), bad);
        summary.push_scan_error("Directory scan error: permission denied");

        assert_eq!(summary.scan_errors.len(), 1);
        assert!(summary.scan_errors[0].contains("permission denied"));
        assert_eq!(summary.errors.len(), 2, "scan errors are also merged");
    }
}
