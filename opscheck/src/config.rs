//! Scan configuration.
//!
//! An explicit parameter struct, not process-global state: callers build
//! one `ScanConfig` and pass it down, so the engine stays testable and
//! free of lifecycle concerns.

/// Options controlling file discovery and reading.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ScanConfig {
    /// Exclude patterns (glob format), matched against the full path and
    /// the file name.
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links during directory walks.
    ///
    /// Defaults to `false`: following symlinks can escape the scanned
    /// tree and read unrelated files.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
        }
    }
}
