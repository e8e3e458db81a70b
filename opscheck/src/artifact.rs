//! Build artifact inspection.
//!
//! A deliberately simpler sibling of the validation engine: identifies
//! package/artifact files (DEB, RPM, Dockerfiles, archives) and collects
//! whatever metadata is cheaply available. Package formats are inspected
//! by shelling out to the platform tools (`dpkg-deb`, `rpm`, `tar`); a
//! missing tool degrades to a note in the metadata, never an error.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::process::Command;

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

/// Recognized artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArtifactKind {
    Deb,
    Rpm,
    Dockerfile,
    Archive,
    Unknown,
}

impl ArtifactKind {
    /// Detect the artifact kind from a path.
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        if path.to_string_lossy().contains("Dockerfile") {
            return Self::Dockerfile;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("deb") => Self::Deb,
            Some("rpm") => Self::Rpm,
            Some("tar" | "gz" | "tgz" | "zip") => Self::Archive,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Deb => "DEB Package",
            Self::Rpm => "RPM Package",
            Self::Dockerfile => "Dockerfile",
            Self::Archive => "Archive",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Metadata gathered for one artifact.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ArtifactInfo {
    /// File name of the artifact.
    pub name: String,
    /// Detected kind.
    pub kind: ArtifactKind,
    /// Size in bytes, when the file could be stat'ed.
    pub size: Option<u64>,
    /// Key/value metadata (package fields, instruction counts).
    pub metadata: BTreeMap<String, String>,
    /// Declared dependencies or base images.
    pub dependencies: Vec<String>,
    /// Whether the analysis ran to completion.
    pub complete: bool,
}

impl ArtifactInfo {
    fn new(path: &Path, kind: ArtifactKind) -> Self {
        Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            kind,
            size: std::fs::metadata(path).ok().map(|m| m.len()),
            metadata: BTreeMap::new(),
            dependencies: Vec::new(),
            complete: true,
        }
    }
}

/// Analyze a single artifact file.
///
/// # Errors
///
/// Returns an error if the file does not exist. Missing platform tools
/// are not errors; they only limit the collected metadata.
pub fn analyze_file(path: &Path) -> anyhow::Result<ArtifactInfo> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    let kind = ArtifactKind::detect(path);
    debug!(path = %path.display(), %kind, "analyzing artifact");
    let mut info = ArtifactInfo::new(path, kind);
    let path_str = path.to_string_lossy();

    match kind {
        ArtifactKind::Deb => inspect_package(
            &mut info,
            "dpkg-deb",
            &["-I", path_str.as_ref()],
            &["Package", "Version", "Architecture", "Depends"],
        ),
        ArtifactKind::Rpm => inspect_package(
            &mut info,
            "rpm",
            &["-qip", path_str.as_ref()],
            &["Name", "Version", "Architecture"],
        ),
        ArtifactKind::Dockerfile => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            inspect_dockerfile(&content, &mut info);
        }
        ArtifactKind::Archive => inspect_archive(path, &mut info),
        ArtifactKind::Unknown => {}
    }

    Ok(info)
}

/// Analyze every artifact directly under `dir` (non-recursive).
///
/// # Errors
///
/// Returns an error if the directory cannot be read. Individual artifact
/// failures are skipped, not propagated.
pub fn analyze_directory(dir: &Path) -> anyhow::Result<Vec<ArtifactInfo>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut analyzed = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() && ArtifactKind::detect(&path) != ArtifactKind::Unknown {
            match analyze_file(&path) {
                Ok(info) => analyzed.push(info),
                Err(err) => debug!(path = %path.display(), %err, "artifact analysis skipped"),
            }
        }
    }
    Ok(analyzed)
}

/// Run a package inspection tool and lift `Field: value` lines whose
/// field is in `fields` into the metadata map. `Depends` lines are split
/// into the dependency list instead.
fn inspect_package(info: &mut ArtifactInfo, tool: &str, args: &[&str], fields: &[&str]) {
    let output = Command::new(tool).args(args).output();

    let stdout = match output {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).into_owned(),
        _ => {
            info.metadata.insert(
                "Note".to_owned(),
                format!("{tool} not available - limited analysis"),
            );
            return;
        }
    };

    for line in stdout.lines() {
        let Some((field, value)) = line.split_once(':') else {
            continue;
        };
        let field = field.trim();
        let value = value.trim();
        if !fields.contains(&field) {
            continue;
        }
        if field == "Depends" {
            info.dependencies = value
                .split(',')
                .map(|dep| dep.trim().to_owned())
                .filter(|dep| !dep.is_empty())
                .collect();
        } else {
            info.metadata.insert(field.to_owned(), value.to_owned());
        }
    }
}

/// Pure-text Dockerfile inspection: instruction counts, base images,
/// exposed ports, multi-stage detection.
fn inspect_dockerfile(content: &str, info: &mut ArtifactInfo) {
    let mut from_count = 0;
    let mut run_count = 0;
    let mut copy_count = 0;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if let Some(base) = trimmed.strip_prefix("FROM ") {
            from_count += 1;
            info.dependencies.push(format!("Base: {}", base.trim()));
        } else if trimmed.starts_with("RUN ") {
            run_count += 1;
        } else if trimmed.starts_with("COPY ") {
            copy_count += 1;
        } else if let Some(ports) = trimmed.strip_prefix("EXPOSE ") {
            info.metadata
                .insert("Ports".to_owned(), ports.trim().to_owned());
        }
    }

    info.metadata
        .insert("FROM instructions".to_owned(), from_count.to_string());
    info.metadata
        .insert("RUN instructions".to_owned(), run_count.to_string());
    info.metadata
        .insert("COPY instructions".to_owned(), copy_count.to_string());
    info.metadata.insert(
        "Multi-stage".to_owned(),
        if from_count > 1 { "Yes" } else { "No" }.to_owned(),
    );
}

/// Archive inspection: record the format and, for tarballs, the entry
/// count when `tar` is available.
fn inspect_archive(path: &Path, info: &mut ArtifactInfo) {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    info.metadata.insert("Format".to_owned(), format!(".{ext}"));

    if matches!(ext, "tar" | "tgz" | "gz") {
        let path_str = path.to_string_lossy();
        let output = Command::new("tar").args(["-tf", path_str.as_ref()]).output();
        if let Ok(out) = output
            && out.status.success()
        {
            let count = out.stdout.split(|b| *b == b'\n').filter(|l| !l.is_empty()).count();
            info.metadata.insert("Files".to_owned(), count.to_string());
        }
    }
}

/// Human-readable size with two decimals (B through TB).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.2} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_artifact_kinds() {
        assert_eq!(ArtifactKind::detect(Path::new("pkg.deb")), ArtifactKind::Deb);
        assert_eq!(ArtifactKind::detect(Path::new("pkg.rpm")), ArtifactKind::Rpm);
        assert_eq!(
            ArtifactKind::detect(Path::new("docker/Dockerfile.prod")),
            ArtifactKind::Dockerfile
        );
        assert_eq!(
            ArtifactKind::detect(Path::new("dist.tar")),
            ArtifactKind::Archive
        );
        assert_eq!(
            ArtifactKind::detect(Path::new("release.tgz")),
            ArtifactKind::Archive
        );
        assert_eq!(
            ArtifactKind::detect(Path::new("notes.txt")),
            ArtifactKind::Unknown
        );
    }

    #[test]
    fn dockerfile_inspection_counts_instructions() {
        let content = "\
FROM rust:1.92 AS builder
COPY . .
RUN cargo build --release

FROM debian:stable-slim
COPY --from=builder /app/target/release/app /usr/bin/app
EXPOSE 8080
";
        let mut info = ArtifactInfo {
            name: "Dockerfile".to_owned(),
            kind: ArtifactKind::Dockerfile,
            size: None,
            metadata: BTreeMap::new(),
            dependencies: Vec::new(),
            complete: true,
        };
        inspect_dockerfile(content, &mut info);

        assert_eq!(info.metadata["FROM instructions"], "2");
        assert_eq!(info.metadata["RUN instructions"], "1");
        assert_eq!(info.metadata["COPY instructions"], "2");
        assert_eq!(info.metadata["Multi-stage"], "Yes");
        assert_eq!(info.metadata["Ports"], "8080");
        assert_eq!(info.dependencies.len(), 2);
        assert!(info.dependencies[0].starts_with("Base: rust:1.92"));
    }

    #[test]
    fn missing_artifact_is_an_error() {
        let err = analyze_file(Path::new("/nonexistent/pkg.deb")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn size_formatting() {
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }
}
