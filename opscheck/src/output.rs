//! Plain formatters for validation results.
//!
//! JSON and uncolored text renderings over any `Write`. Terminal color is
//! deliberately not handled here — the CLI layer owns that, with an
//! explicit color flag rather than process-global state.

use std::io::Write;

use serde::Serialize;

use crate::report::{DirectorySummary, ValidationResult};

/// Serialize any report type as pretty JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Render a single file's result as plain text: one line per error,
/// warning and note, then a verdict line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_file_human(result: &ValidationResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    for error in &result.errors {
        writeln!(writer, "  ERROR: {error}")?;
    }
    for warning in &result.warnings {
        writeln!(writer, "  WARNING: {warning}")?;
    }
    for note in &result.notes {
        writeln!(writer, "  INFO: {note}")?;
    }
    if result.valid {
        writeln!(writer, "Valid {} file", result.file_type)?;
    } else {
        writeln!(writer, "Invalid {} file", result.file_type)?;
    }
    Ok(())
}

/// Render a directory summary as plain text: per-file sections followed
/// by the aggregate counts.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary_human(
    summary: &DirectorySummary,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    for outcome in &summary.files {
        writeln!(writer, "Validating: {}", outcome.path.display())?;
        write_file_human(&outcome.result, writer)?;
        writeln!(writer)?;
    }

    writeln!(writer, "=== Directory Validation Summary ===")?;
    writeln!(writer, "Files checked: {}", summary.files_checked)?;
    writeln!(writer, "Files valid: {}", summary.files_valid)?;
    writeln!(writer, "Files invalid: {}", summary.files_invalid())?;
    Ok(())
}
