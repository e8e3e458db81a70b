//! Filesystem collaborator: bounded reads and recursive file discovery.

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::report::FileKind;

/// Directories never descended into during a scan.
pub const SKIP_DIRS: &[&str] = &[".git", "node_modules", "target", "vendor"];

/// A file that could not be read for validation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("Failed to read file: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("File exceeds maximum size of {limit} bytes")]
    TooLarge { path: PathBuf, limit: u64 },
    #[error("File is not valid UTF-8")]
    NotUtf8 { path: PathBuf },
}

/// Check if a path matches any of the exclude patterns, either on the
/// full path or on the file name alone.
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

/// `WalkDir::filter_entry` predicate: `true` when the entry is NOT a
/// skip directory.
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Recursively discover validatable files under `root`.
///
/// Returns `(files, scan_errors)`:
/// - `files`: regular files whose detected format is known, sorted and
///   deduplicated (callers must not rely on traversal order beyond that).
/// - `scan_errors`: walk failures (permission denied, loops) and invalid
///   exclude patterns, as directory-scope error messages. A failure never
///   aborts discovery; remaining entries are still visited.
#[must_use]
pub fn find_files(root: &Path, config: &ScanConfig) -> (Vec<PathBuf>, Vec<String>) {
    let mut files = Vec::new();
    let mut scan_errors = Vec::new();

    let mut exclude_patterns = Vec::with_capacity(config.exclude.len());
    for pat_str in &config.exclude {
        match Pattern::new(pat_str) {
            Ok(pat) => exclude_patterns.push(pat),
            Err(e) => {
                scan_errors.push(format!("Invalid exclude glob pattern '{pat_str}': {e}"));
            }
        }
    }

    for entry_result in WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                scan_errors.push(format!("Directory scan error: {walk_err}"));
                continue;
            }
        };

        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }

        // Regular files only — skip devices, pipes, sockets.
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if let Ok(ft) = entry.metadata().map(|m| m.file_type())
                && (ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket())
            {
                continue;
            }
        }

        if FileKind::detect(file_path) == FileKind::Unknown {
            continue;
        }

        if matches_exclude(file_path, &exclude_patterns) {
            continue;
        }

        debug!(path = %file_path.display(), "discovered file");
        files.push(file_path.to_path_buf());
    }

    files.sort();
    files.dedup();
    (files, scan_errors)
}

/// Read a file with a bounded streaming read, enforcing `max_file_size`.
///
/// The size check and the read are the same operation (`Read::take`), so
/// a file growing between stat and read cannot blow past the limit.
///
/// # Errors
///
/// Returns [`ScanError`] when the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, ScanError> {
    let file = std::fs::File::open(path).map_err(|source| ScanError::Io {
        path: path.to_owned(),
        source,
    })?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|source| ScanError::Io {
            path: path.to_owned(),
            source,
        })?;

    if buffer.len() as u64 > max_file_size {
        return Err(ScanError::TooLarge {
            path: path.to_owned(),
            limit: max_file_size,
        });
    }

    String::from_utf8(buffer).map_err(|_| ScanError::NotUtf8 {
        path: path.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_matches_full_path_and_file_name() {
        let patterns = vec![
            Pattern::new("*.bak.json").unwrap(),
            Pattern::new("build/*").unwrap(),
        ];
        assert!(matches_exclude(Path::new("conf/old.bak.json"), &patterns));
        assert!(matches_exclude(Path::new("build/out.yaml"), &patterns));
        assert!(!matches_exclude(Path::new("conf/app.json"), &patterns));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("big.json");
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let err = read_file_bounded(&path, 16).unwrap_err();
        assert!(matches!(err, ScanError::TooLarge { limit: 16, .. }));
        assert!(err.to_string().contains("maximum size"));
    }

    #[test]
    fn unlimited_size_limit_does_not_overflow() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("small.json");
        std::fs::write(&path, "{}").unwrap();

        let content = read_file_bounded(&path, u64::MAX).unwrap();
        assert_eq!(content, "{}");
    }

    #[test]
    fn non_utf8_file_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("binary.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let err = read_file_bounded(&path, 1024).unwrap_err();
        assert!(matches!(err, ScanError::NotUtf8 { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_file_bounded(Path::new("/nonexistent/x.json"), 1024).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
