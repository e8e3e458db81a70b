//! Terminal presentation of results.
//!
//! Color is an explicit capability on [`Painter`], decided once by the
//! caller (TTY check plus `--no-color`) — there is no global color
//! state, and rendering with color disabled is plain text.

use std::path::Path;

use colored::Colorize;
use opscheck::artifact::{ArtifactInfo, format_size};
use opscheck::{DirectorySummary, ValidationResult};

/// Renders results to stdout, colorizing only when `enabled` is set.
pub struct Painter {
    pub enabled: bool,
}

impl Painter {
    pub fn success(&self, msg: &str) -> String {
        let line = format!("\u{2713} {msg}");
        if self.enabled {
            line.as_str().green().to_string()
        } else {
            line
        }
    }

    pub fn error(&self, msg: &str) -> String {
        let line = format!("\u{2717} {msg}");
        if self.enabled {
            line.as_str().red().to_string()
        } else {
            line
        }
    }

    pub fn warning(&self, msg: &str) -> String {
        let line = format!("\u{26a0} {msg}");
        if self.enabled {
            line.as_str().yellow().to_string()
        } else {
            line
        }
    }

    pub fn info(&self, msg: &str) -> String {
        let line = format!("\u{2139} {msg}");
        if self.enabled {
            line.as_str().cyan().to_string()
        } else {
            line
        }
    }

    fn bold(&self, msg: &str) -> String {
        if self.enabled {
            msg.bold().to_string()
        } else {
            msg.to_owned()
        }
    }

    /// One line per error/warning/note, then the verdict line.
    pub fn print_file(&self, path: &Path, result: &ValidationResult) {
        println!("{}", self.bold(&format!("Validating: {}", path.display())));
        for error in &result.errors {
            eprintln!("  {}", self.error(&format!("ERROR: {error}")));
        }
        for warning in &result.warnings {
            println!("  {}", self.warning(&format!("WARNING: {warning}")));
        }
        for note in &result.notes {
            println!("  {}", self.info(note));
        }
        if result.valid {
            println!("{}", self.success(&format!("Valid {} file", result.file_type)));
        } else {
            println!("{}", self.error(&format!("Invalid {} file", result.file_type)));
        }
    }

    /// Per-file sections followed by the aggregate summary block.
    pub fn print_summary(&self, summary: &DirectorySummary) {
        for outcome in &summary.files {
            self.print_file(&outcome.path, &outcome.result);
            println!();
        }

        // Per-file errors were already shown in the file sections above.
        for error in &summary.scan_errors {
            eprintln!("{}", self.error(error));
        }

        println!("{}", self.bold("=== Directory Validation Summary ==="));
        println!("Files checked: {}", summary.files_checked);
        println!("Files valid: {}", summary.files_valid);
        println!("Files invalid: {}", summary.files_invalid());
        if summary.valid {
            println!("{}", self.success("All files passed validation"));
        } else {
            println!("{}", self.error("Validation failed"));
        }
    }

    /// Artifact block: type, name, size, metadata, dependencies.
    pub fn print_artifact(&self, info: &ArtifactInfo) {
        println!("{} {}", self.bold("Type:"), info.kind);
        println!("{} {}", self.bold("Name:"), info.name);
        if let Some(size) = info.size {
            println!("{} {}", self.bold("Size:"), format_size(size));
        }
        if !info.metadata.is_empty() {
            println!("{}", self.bold("Metadata:"));
            for (key, value) in &info.metadata {
                println!("  {key}: {value}");
            }
        }
        if !info.dependencies.is_empty() {
            println!("{}", self.bold("Dependencies:"));
            for dep in &info.dependencies {
                println!("  - {dep}");
            }
        }
        if info.complete {
            println!("{}", self.success("Artifact analysis complete"));
        } else {
            println!("{}", self.warning("Artifact analysis incomplete"));
        }
    }
}
