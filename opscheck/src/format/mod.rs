//! Per-format validators.
//!
//! Each sub-module takes raw file content and produces a
//! [`crate::ValidationResult`]:
//! - `json` — structural parse via `serde_json`, dialect annotation
//! - `yaml` — structural parse via `serde-saphyr`, dialect annotation
//! - `toml` — lenient line-shape linter (never invalid)
//! - `env` — lenient line-shape linter (never invalid)

pub mod env;
pub mod json;
pub mod toml;
pub mod yaml;
