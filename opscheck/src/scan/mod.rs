//! File discovery and reading.
//!
//! The validation engine itself never touches the filesystem: it works on
//! content strings handed to it. This module is the single collaborator
//! that reads disks, so everything above it stays testable in memory.

pub mod fs;

pub use fs::{ScanError, find_files, read_file_bounded};
